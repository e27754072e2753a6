//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                   |
//! |-------------|---------------|-------------------------------|
//! | `display`   | DisplaySink   | HD44780 character LCD         |
//! | `hardware`  | ButtonInput   | ESP32 GPIO inputs             |
//! |             | OutputPin     | ESP32 GPIO outputs (LCD bus)  |
//! | `log_sink`  | DebugSink     | Serial log output             |
//! | `time`      | Clock         | ESP32 system timer            |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod time;
