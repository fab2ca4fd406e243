//! Doorbell Core - Konfiguration und Protokoll-Vokabular
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die zentrale Geräte-Konfiguration des Türklingel-Notifiers
//! und die typisierten MQTT/NeoPixel-Vokabulare, die darauf aufbauen.

#![no_std]

pub mod config;
pub mod types;

// Re-exports für einfachen Zugriff
pub use types::{MqttMessage, NeopixelColor};
