//! Core Types für den Türklingel-Notifier
//!
//! Typisierte Sicht auf das MQTT-Vokabular und die Farb-Presets.
//! Kein Protokoll-Code - nur Namen, Topics und Payloads.

use rgb::RGB8;

use crate::config::*;

/// MQTT-Nachricht des Türklingel-Protokolls
///
/// Drei Payloads auf zwei Topics bilden das minimale
/// Liveness + Event-Protokoll:
/// - `Connect` einmalig nach Verbindungsaufbau (Connection-Topic)
/// - `Heartbeat` periodisch als Liveness-Ping (Connection-Topic)
/// - `Doorbell` bei einem physischen Klingel-Druck (Produktions-Topic)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MqttMessage {
    Connect,
    Heartbeat,
    Doorbell,
}

impl MqttMessage {
    /// Topic, auf dem diese Nachricht published wird
    pub const fn topic(self) -> &'static str {
        match self {
            Self::Connect | Self::Heartbeat => MQTT_TOPIC_CONNECTION,
            Self::Doorbell => MQTT_TOPIC_PROD,
        }
    }

    /// Payload-String dieser Nachricht
    pub const fn payload(self) -> &'static str {
        match self {
            Self::Connect => MQTT_MSG_CONNECT,
            Self::Heartbeat => MQTT_MSG_HEARTBEAT,
            Self::Doorbell => MQTT_MSG_DOORBELL,
        }
    }
}

impl core::convert::TryFrom<&str> for MqttMessage {
    type Error = ();

    /// Ordnet einen empfangenen Payload-String der Nachricht zu
    fn try_from(payload: &str) -> Result<Self, Self::Error> {
        match payload {
            MQTT_MSG_CONNECT => Ok(Self::Connect),
            MQTT_MSG_HEARTBEAT => Ok(Self::Heartbeat),
            MQTT_MSG_DOORBELL => Ok(Self::Doorbell),
            _ => Err(()),
        }
    }
}

/// Benannte NeoPixel Farb-Presets
///
/// Jede Variante entspricht genau einer `NEOPIXEL_COLOR_*` Konstante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeopixelColor {
    Red,
    Orange,
    Green,
    Blue,
    Black,
    White,
}

impl NeopixelColor {
    /// RGB-Wert des Presets (gedimmter 0-10 Bereich, siehe config.rs)
    pub const fn rgb(self) -> RGB8 {
        match self {
            Self::Red => NEOPIXEL_COLOR_RED,
            Self::Orange => NEOPIXEL_COLOR_ORANGE,
            Self::Green => NEOPIXEL_COLOR_GREEN,
            Self::Blue => NEOPIXEL_COLOR_BLUE,
            Self::Black => NEOPIXEL_COLOR_BLACK,
            Self::White => NEOPIXEL_COLOR_WHITE,
        }
    }

    /// Name des Presets (für Logging und Status-Meldungen)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Rot",
            Self::Orange => "Orange",
            Self::Green => "Grün",
            Self::Blue => "Blau",
            Self::Black => "Schwarz",
            Self::White => "Weiß",
        }
    }
}

impl core::convert::TryFrom<&str> for NeopixelColor {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "Rot" => Ok(Self::Red),
            "Orange" => Ok(Self::Orange),
            "Grün" => Ok(Self::Green),
            "Blau" => Ok(Self::Blue),
            "Schwarz" => Ok(Self::Black),
            "Weiß" => Ok(Self::White),
            _ => Err(()),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for MqttMessage {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "MqttMessage {{ topic: {}, payload: {} }}",
            self.topic(),
            self.payload()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NeopixelColor {
    fn format(&self, fmt: defmt::Formatter) {
        let rgb = self.rgb();
        defmt::write!(
            fmt,
            "NeopixelColor {{ name: {}, rgb: ({}, {}, {}) }}",
            self.name(),
            rgb.r,
            rgb.g,
            rgb.b
        )
    }
}
