//! Sample configuration files.

/// One module (`blink` in `./blink`) and two targets: a fully flagged
/// `esp32` and an `echo` target whose wipe command always succeeds.
pub const SAMPLE_CONFIG: &str = r#"{
  "debug": false,
  "editCommand": "",
  "modules": [
    {
      "name": "blink",
      "description": "blinks an LED",
      "isHost": false,
      "debugFlag": true,
      "makeFlag": true,
      "folderPath": "blink"
    }
  ],
  "targets": [
    {
      "name": "echo",
      "description": "",
      "platform": "sim",
      "wipeCommand": "echo erased",
      "formatFlag": false,
      "formatStr": "",
      "rotationFlag": false,
      "rotationValue": 0
    },
    {
      "name": "esp32",
      "description": "Moddable Two",
      "platform": "esp32",
      "wipeCommand": "",
      "formatFlag": true,
      "formatStr": "rgb565le",
      "rotationFlag": true,
      "rotationValue": 90
    }
  ]
}
"#;

/// Older layout: `debugBuild`/`runMake` on modules, `format`/`rotation` on
/// targets, plus a misspelled key.
pub const LEGACY_CONFIG: &str = r#"{
  "debug": false,
  "modules": [
    {
      "name": "blink",
      "isHost": false,
      "debugBuild": true,
      "runMake": false,
      "folderPath": "blink"
    }
  ],
  "targets": [
    {
      "name": "esp32",
      "platform": "esp32",
      "format": "rgb565le",
      "rotation": 180,
      "wipeComand": "esptool.py erase_flash"
    }
  ]
}
"#;
