//! Weather classification and style resolution.
//!
//! Everything in this module is a pure function: the same weather input
//! always resolves to the same [`StyleDescriptor`]. Classification is
//! total — unrecognized codes and condition strings map to
//! [`WeatherClass::Unknown`], which resolves to the neutral mono
//! palette, never to an error.

use serde::{Deserialize, Serialize};

/// Weather classes the resolver distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherClass {
    /// Clear sky.
    Clear,
    /// Partly to fully cloudy.
    Clouds,
    /// Rain, including showers.
    Rain,
    /// Light drizzle, including freezing drizzle.
    Drizzle,
    /// Thunderstorm, with or without hail.
    Thunderstorm,
    /// Snowfall, snow grains, and snow showers.
    Snow,
    /// Mist, fog, and haze.
    Atmosphere,
    /// Anything the classifier does not recognize.
    Unknown,
}

impl WeatherClass {
    /// Classify a WMO-style numeric weather code.
    ///
    /// Buckets follow the WMO 4677 present-weather groups as used by the
    /// open-meteo API. Total: codes outside every bucket are `Unknown`.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => WeatherClass::Clear,
            1..=3 => WeatherClass::Clouds,
            45 | 48 => WeatherClass::Atmosphere,
            51..=57 => WeatherClass::Drizzle,
            61..=67 | 80..=82 => WeatherClass::Rain,
            71..=77 | 85 | 86 => WeatherClass::Snow,
            95..=99 => WeatherClass::Thunderstorm,
            _ => WeatherClass::Unknown,
        }
    }

    /// Classify a free-text condition description, case-insensitively.
    pub fn from_condition(text: &str) -> Self {
        let t = text.to_ascii_lowercase();
        if t.contains("thunder") || t.contains("storm") {
            WeatherClass::Thunderstorm
        } else if t.contains("drizzle") {
            WeatherClass::Drizzle
        } else if t.contains("rain") || t.contains("shower") {
            WeatherClass::Rain
        } else if t.contains("snow") || t.contains("sleet") {
            WeatherClass::Snow
        } else if t.contains("mist") || t.contains("fog") || t.contains("haze") {
            WeatherClass::Atmosphere
        } else if t.contains("cloud") || t.contains("overcast") {
            WeatherClass::Clouds
        } else if t.contains("clear") || t.contains("sun") {
            WeatherClass::Clear
        } else {
            WeatherClass::Unknown
        }
    }

    /// Decorative keyword associated with the class.
    pub fn keyword(&self) -> &'static str {
        match self {
            WeatherClass::Clear => "radiance",
            WeatherClass::Clouds => "drift",
            WeatherClass::Rain => "cascade",
            WeatherClass::Drizzle => "veil",
            WeatherClass::Thunderstorm => "voltage",
            WeatherClass::Snow => "stillness",
            WeatherClass::Atmosphere => "vapor",
            WeatherClass::Unknown => "neutral",
        }
    }
}

/// Identifier of a fixed five-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteId {
    /// Warm reds/oranges/yellows.
    Warm,
    /// Cool blues/greens.
    Cool,
    /// Neutral grayscale ramp.
    Mono,
}

const WARM: [[u8; 3]; 5] = [
    [0xff, 0x6b, 0x6b],
    [0xff, 0xa3, 0x6c],
    [0xff, 0xd9, 0x3d],
    [0xff, 0xb5, 0xa7],
    [0xf0, 0x71, 0x67],
];

const COOL: [[u8; 3]; 5] = [
    [0x57, 0x75, 0x90],
    [0x4d, 0x90, 0x8e],
    [0x43, 0xaa, 0x8b],
    [0x90, 0xbe, 0x6d],
    [0xf9, 0xc7, 0x4f],
];

const MONO: [[u8; 3]; 5] = [
    [0x11, 0x11, 0x11],
    [0x44, 0x44, 0x44],
    [0x88, 0x88, 0x88],
    [0xcc, 0xcc, 0xcc],
    [0xff, 0xff, 0xff],
];

impl PaletteId {
    /// The palette's five RGB colors.
    pub fn colors(&self) -> &'static [[u8; 3]; 5] {
        match self {
            PaletteId::Warm => &WARM,
            PaletteId::Cool => &COOL,
            PaletteId::Mono => &MONO,
        }
    }
}

/// Resolved upstream weather observation.
///
/// Producing this value (HTTP, parsing, units) is the weather
/// collaborator's job; the resolver only consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSignal {
    /// WMO-style weather code.
    pub code: u16,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Wind speed in meters per second.
    pub wind_speed_mps: f64,
}

/// The full set of visual parameters driving one render.
///
/// Immutable once resolved; create a fresh one per render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// Which fixed palette shapes and accents are drawn from.
    pub palette: PaletteId,
    /// Primary color (first palette entry).
    pub primary: [u8; 3],
    /// Gradient start / first accent.
    pub accent_a: [u8; 3],
    /// Gradient end / second accent.
    pub accent_b: [u8; 3],
    /// Decorative keyword for the class.
    pub keyword: String,
    /// Number of decorative shapes to scatter.
    pub shape_density: u32,
    /// Amplitude of the noise band, in pixels.
    pub noise_strength: u32,
}

impl StyleDescriptor {
    /// Resolve a weather class to its default style.
    ///
    /// Pure and referentially transparent; `Unknown` resolves to the
    /// neutral mono palette.
    pub fn resolve(class: WeatherClass) -> Self {
        let (palette, accent_ix, shape_density, noise_strength) = match class {
            WeatherClass::Clear => (PaletteId::Warm, (2, 1), 5, 2),
            WeatherClass::Clouds => (PaletteId::Cool, (0, 3), 6, 4),
            WeatherClass::Rain => (PaletteId::Cool, (0, 1), 7, 8),
            WeatherClass::Drizzle => (PaletteId::Cool, (1, 2), 6, 5),
            WeatherClass::Thunderstorm => (PaletteId::Mono, (0, 2), 9, 12),
            WeatherClass::Snow => (PaletteId::Mono, (3, 4), 8, 6),
            WeatherClass::Atmosphere => (PaletteId::Cool, (1, 3), 5, 3),
            WeatherClass::Unknown => (PaletteId::Mono, (2, 3), 5, 2),
        };

        let colors = palette.colors();
        Self {
            palette,
            primary: colors[0],
            accent_a: colors[accent_ix.0],
            accent_b: colors[accent_ix.1],
            keyword: class.keyword().to_string(),
            shape_density,
            noise_strength,
        }
    }

    /// Resolve a full weather observation.
    ///
    /// Applies the scalar rules on top of [`StyleDescriptor::resolve`]:
    /// temperature below 10 °C selects the cool palette family (warm
    /// otherwise), shape density is `5 + code % 5`, and noise strength
    /// is four pixels per m/s of wind, truncated.
    pub fn resolve_signal(signal: &WeatherSignal) -> Self {
        let class = WeatherClass::from_code(signal.code);
        let mut style = Self::resolve(class);

        if class != WeatherClass::Unknown {
            let palette = if signal.temperature_c < 10.0 {
                PaletteId::Cool
            } else {
                PaletteId::Warm
            };
            if palette != style.palette {
                let colors = palette.colors();
                style.palette = palette;
                style.primary = colors[0];
                style.accent_a = colors[0];
                style.accent_b = colors[3];
            }
        }

        style.shape_density = 5 + u32::from(signal.code % 5);
        style.noise_strength = (signal.wind_speed_mps * 4.0).max(0.0) as u32;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_classification_buckets() {
        assert_eq!(WeatherClass::from_code(0), WeatherClass::Clear);
        assert_eq!(WeatherClass::from_code(2), WeatherClass::Clouds);
        assert_eq!(WeatherClass::from_code(45), WeatherClass::Atmosphere);
        assert_eq!(WeatherClass::from_code(53), WeatherClass::Drizzle);
        assert_eq!(WeatherClass::from_code(63), WeatherClass::Rain);
        assert_eq!(WeatherClass::from_code(81), WeatherClass::Rain);
        assert_eq!(WeatherClass::from_code(75), WeatherClass::Snow);
        assert_eq!(WeatherClass::from_code(86), WeatherClass::Snow);
        assert_eq!(WeatherClass::from_code(96), WeatherClass::Thunderstorm);
    }

    #[test]
    fn classification_is_total() {
        // Every possible code resolves to some class and some style.
        for code in 0..=u16::MAX {
            let class = WeatherClass::from_code(code);
            let style = StyleDescriptor::resolve(class);
            assert_eq!(style.palette.colors().len(), 5);
        }
        assert_eq!(WeatherClass::from_code(9999), WeatherClass::Unknown);
    }

    #[test]
    fn condition_text_classification() {
        assert_eq!(
            WeatherClass::from_condition("Light Rain Showers"),
            WeatherClass::Rain
        );
        assert_eq!(
            WeatherClass::from_condition("THUNDERSTORM"),
            WeatherClass::Thunderstorm
        );
        assert_eq!(WeatherClass::from_condition("Haze"), WeatherClass::Atmosphere);
        assert_eq!(WeatherClass::from_condition("xyz"), WeatherClass::Unknown);
    }

    #[test]
    fn unknown_resolves_to_neutral_palette() {
        let style = StyleDescriptor::resolve(WeatherClass::Unknown);
        assert_eq!(style.palette, PaletteId::Mono);
        assert_eq!(style.keyword, "neutral");
    }

    #[test]
    fn resolver_is_referentially_transparent() {
        let a = StyleDescriptor::resolve(WeatherClass::Rain);
        let b = StyleDescriptor::resolve(WeatherClass::Rain);
        assert_eq!(a, b);
    }

    #[test]
    fn signal_scalar_rules() {
        let signal = WeatherSignal {
            code: 63,
            temperature_c: 4.5,
            wind_speed_mps: 2.3,
        };
        let style = StyleDescriptor::resolve_signal(&signal);
        assert_eq!(style.palette, PaletteId::Cool);
        assert_eq!(style.shape_density, 5 + 63 % 5);
        assert_eq!(style.noise_strength, 9); // 2.3 * 4 truncated

        let warm = StyleDescriptor::resolve_signal(&WeatherSignal {
            temperature_c: 24.0,
            ..signal
        });
        assert_eq!(warm.palette, PaletteId::Warm);
    }

    #[test]
    fn negative_wind_clamps_to_zero_strength() {
        let style = StyleDescriptor::resolve_signal(&WeatherSignal {
            code: 0,
            temperature_c: 20.0,
            wind_speed_mps: -3.0,
        });
        assert_eq!(style.noise_strength, 0);
    }
}
