//! Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//!
//! Alle deployment-spezifischen Werte (Credentials, Broker-Adresse,
//! Pin-Belegung) werden HIER angepasst - nirgendwo sonst.
//! Die Namen sind Teil des öffentlichen Vertrags: Firmware-Logik und
//! Broker-Gegenstellen referenzieren sie direkt, Umbenennen ist ein
//! Breaking Change.

use rgb::RGB8;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Platzhalter - vor dem Flashen durch das eigene Netzwerk ersetzen
pub const WIFI_SSID: &str = "WifiSsid";

/// WiFi Passwort
/// Platzhalter - vor dem Flashen durch das eigene Passwort ersetzen
pub const WIFI_PASSWORD: &str = "WifiPassword";

// ============================================================================
// MQTT Konfiguration
// ============================================================================

/// MQTT Broker Hostname oder IPv4-Adresse
pub const MQTT_SERVER: &str = "192.168.0.23";

/// MQTT Broker Port
/// Standard: 1883 (unverschlüsselt), 8883 (TLS)
pub const MQTT_PORT: u16 = 1883;

/// MQTT Topic für Verbindungs-/Liveness-Signale
/// Hier werden Connect-Announcement und Heartbeat published
pub const MQTT_TOPIC_CONNECTION: &str = "doorbell_connection";

/// MQTT Payload für den periodischen Liveness-Ping
pub const MQTT_MSG_HEARTBEAT: &str = "heartbeat";

/// MQTT Payload für das einmalige Connect-Announcement
pub const MQTT_MSG_CONNECT: &str = "connected";

/// MQTT Topic für das eigentliche Klingel-Event
/// Muss sich vom Connection-Topic unterscheiden
pub const MQTT_TOPIC_PROD: &str = "doorbell";

/// MQTT Payload für einen Klingel-Druck
pub const MQTT_MSG_DOORBELL: &str = "dingdong";

/// Verbindungs-/Liveness-Timeout in Sekunden
/// Bleibt der Heartbeat länger aus, gilt die Verbindung als verloren
pub const TIMEOUT_RESET_VAL: u64 = 40;

// ============================================================================
// NeoPixel Konfiguration
// ============================================================================

/// GPIO-Pin für den NeoPixel-Strip (WS2812)
pub const NEOPIXEL_PIN: u8 = 8;

/// Anzahl der LEDs im Strip
pub const NEOPIXEL_NUMPIXELS: usize = 12;

// ============================================================================
// NeoPixel Farb-Presets
// ============================================================================
// Kanäle bewusst auf 0-10 gedimmt (statt volle 0-255) für Augenschonung.
// Helligkeit hier anpassen, falls nötig.

pub const NEOPIXEL_COLOR_RED: RGB8 = RGB8 { r: 10, g: 0, b: 0 };
pub const NEOPIXEL_COLOR_ORANGE: RGB8 = RGB8 { r: 10, g: 5, b: 0 };
pub const NEOPIXEL_COLOR_GREEN: RGB8 = RGB8 { r: 0, g: 10, b: 0 };
pub const NEOPIXEL_COLOR_BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 10 };
pub const NEOPIXEL_COLOR_BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const NEOPIXEL_COLOR_WHITE: RGB8 = RGB8 { r: 10, g: 10, b: 10 };
