//! Typography tokens

use serde::{Deserialize, Serialize};

/// Typography variant keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyToken {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

impl TypographyToken {
    pub const ALL: [TypographyToken; 13] = [
        TypographyToken::H1,
        TypographyToken::H2,
        TypographyToken::H3,
        TypographyToken::H4,
        TypographyToken::H5,
        TypographyToken::H6,
        TypographyToken::Subtitle1,
        TypographyToken::Subtitle2,
        TypographyToken::Body1,
        TypographyToken::Body2,
        TypographyToken::Button,
        TypographyToken::Caption,
        TypographyToken::Overline,
    ];
}

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// A named text style preset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyVariant {
    pub font_family: String,
    pub font_weight: u16,
    /// CSS length, e.g. `"6rem"`
    pub font_size: String,
    pub line_height: f32,
    /// CSS length, e.g. `"-0.01562em"`
    pub letter_spacing: String,
    pub text_transform: TextTransform,
}

impl TypographyVariant {
    fn apply(&mut self, options: &TypographyVariantOptions) {
        if let Some(font_family) = &options.font_family {
            self.font_family = font_family.clone();
        }
        if let Some(font_weight) = options.font_weight {
            self.font_weight = font_weight;
        }
        if let Some(font_size) = &options.font_size {
            self.font_size = font_size.clone();
        }
        if let Some(line_height) = options.line_height {
            self.line_height = line_height;
        }
        if let Some(letter_spacing) = &options.letter_spacing {
            self.letter_spacing = letter_spacing.clone();
        }
        if let Some(text_transform) = options.text_transform {
            self.text_transform = text_transform;
        }
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_family: String,
    /// Base font size the variant scale is designed around, in px
    pub font_size: f32,
    /// Root font size used for px to rem conversion
    pub html_font_size: f32,
    pub font_weight_light: u16,
    pub font_weight_regular: u16,
    pub font_weight_medium: u16,
    pub font_weight_bold: u16,
    pub h1: TypographyVariant,
    pub h2: TypographyVariant,
    pub h3: TypographyVariant,
    pub h4: TypographyVariant,
    pub h5: TypographyVariant,
    pub h6: TypographyVariant,
    pub subtitle1: TypographyVariant,
    pub subtitle2: TypographyVariant,
    pub body1: TypographyVariant,
    pub body2: TypographyVariant,
    pub button: TypographyVariant,
    pub caption: TypographyVariant,
    pub overline: TypographyVariant,
}

pub const DEFAULT_FONT_FAMILY: &str = r#""Roboto", "Helvetica", "Arial", sans-serif"#;

#[derive(Clone, Copy)]
enum Weight {
    Light,
    Regular,
    Medium,
}

struct VariantSpec {
    weight: Weight,
    size_px: f32,
    line_height: f32,
    letter_spacing: &'static str,
    transform: TextTransform,
}

const fn spec(
    weight: Weight,
    size_px: f32,
    line_height: f32,
    letter_spacing: &'static str,
) -> VariantSpec {
    VariantSpec {
        weight,
        size_px,
        line_height,
        letter_spacing,
        transform: TextTransform::None,
    }
}

const fn upper(mut spec: VariantSpec) -> VariantSpec {
    spec.transform = TextTransform::Uppercase;
    spec
}

/// Type scale, indexed like [`TypographyToken::ALL`]
const SCALE: [VariantSpec; 13] = [
    spec(Weight::Light, 96.0, 1.167, "-0.01562em"),
    spec(Weight::Light, 60.0, 1.2, "-0.00833em"),
    spec(Weight::Regular, 48.0, 1.167, "0em"),
    spec(Weight::Regular, 34.0, 1.235, "0.00735em"),
    spec(Weight::Regular, 24.0, 1.334, "0em"),
    spec(Weight::Medium, 20.0, 1.6, "0.0075em"),
    spec(Weight::Regular, 16.0, 1.75, "0.00938em"),
    spec(Weight::Medium, 14.0, 1.57, "0.00714em"),
    spec(Weight::Regular, 16.0, 1.5, "0.00938em"),
    spec(Weight::Regular, 14.0, 1.43, "0.01071em"),
    upper(spec(Weight::Medium, 14.0, 1.75, "0.02857em")),
    spec(Weight::Regular, 12.0, 1.66, "0.03333em"),
    upper(spec(Weight::Regular, 12.0, 2.66, "0.08333em")),
];

impl Typography {
    pub const DEFAULT_FONT_SIZE: f32 = 14.0;
    pub const DEFAULT_HTML_FONT_SIZE: f32 = 16.0;

    /// Get a variant by token key
    pub fn variant(&self, token: TypographyToken) -> &TypographyVariant {
        match token {
            TypographyToken::H1 => &self.h1,
            TypographyToken::H2 => &self.h2,
            TypographyToken::H3 => &self.h3,
            TypographyToken::H4 => &self.h4,
            TypographyToken::H5 => &self.h5,
            TypographyToken::H6 => &self.h6,
            TypographyToken::Subtitle1 => &self.subtitle1,
            TypographyToken::Subtitle2 => &self.subtitle2,
            TypographyToken::Body1 => &self.body1,
            TypographyToken::Body2 => &self.body2,
            TypographyToken::Button => &self.button,
            TypographyToken::Caption => &self.caption,
            TypographyToken::Overline => &self.overline,
        }
    }

    fn variant_mut(&mut self, token: TypographyToken) -> &mut TypographyVariant {
        match token {
            TypographyToken::H1 => &mut self.h1,
            TypographyToken::H2 => &mut self.h2,
            TypographyToken::H3 => &mut self.h3,
            TypographyToken::H4 => &mut self.h4,
            TypographyToken::H5 => &mut self.h5,
            TypographyToken::H6 => &mut self.h6,
            TypographyToken::Subtitle1 => &mut self.subtitle1,
            TypographyToken::Subtitle2 => &mut self.subtitle2,
            TypographyToken::Body1 => &mut self.body1,
            TypographyToken::Body2 => &mut self.body2,
            TypographyToken::Button => &mut self.button,
            TypographyToken::Caption => &mut self.caption,
            TypographyToken::Overline => &mut self.overline,
        }
    }

    /// Convert a px size to rem, scaled by `font_size / 14`
    pub fn px_to_rem(&self, px: f32) -> String {
        px_to_rem(px, self.font_size, self.html_font_size)
    }

    /// Merge an override onto the defaults.
    ///
    /// Base settings (family, sizes, weights) are applied first so the
    /// generated variants pick them up; per-variant overrides are applied last.
    pub fn compose(options: Option<&TypographyOptions>) -> Self {
        let default = TypographyOptions::default();
        let options = options.unwrap_or(&default);

        let font_family = options
            .font_family
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
        let font_size = options.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE);
        let html_font_size = options.html_font_size.unwrap_or(Self::DEFAULT_HTML_FONT_SIZE);
        let light = options.font_weight_light.unwrap_or(300);
        let regular = options.font_weight_regular.unwrap_or(400);
        let medium = options.font_weight_medium.unwrap_or(500);
        let bold = options.font_weight_bold.unwrap_or(700);

        let build = |spec: &VariantSpec| TypographyVariant {
            font_family: font_family.clone(),
            font_weight: match spec.weight {
                Weight::Light => light,
                Weight::Regular => regular,
                Weight::Medium => medium,
            },
            font_size: px_to_rem(spec.size_px, font_size, html_font_size),
            line_height: spec.line_height,
            letter_spacing: spec.letter_spacing.to_string(),
            text_transform: spec.transform,
        };

        let mut typography = Self {
            font_family: font_family.clone(),
            font_size,
            html_font_size,
            font_weight_light: light,
            font_weight_regular: regular,
            font_weight_medium: medium,
            font_weight_bold: bold,
            h1: build(&SCALE[0]),
            h2: build(&SCALE[1]),
            h3: build(&SCALE[2]),
            h4: build(&SCALE[3]),
            h5: build(&SCALE[4]),
            h6: build(&SCALE[5]),
            subtitle1: build(&SCALE[6]),
            subtitle2: build(&SCALE[7]),
            body1: build(&SCALE[8]),
            body2: build(&SCALE[9]),
            button: build(&SCALE[10]),
            caption: build(&SCALE[11]),
            overline: build(&SCALE[12]),
        };

        for token in TypographyToken::ALL {
            if let Some(variant_options) = options.variant(token) {
                typography.variant_mut(token).apply(variant_options);
            }
        }

        typography
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::compose(None)
    }
}

fn px_to_rem(px: f32, font_size: f32, html_font_size: f32) -> String {
    let coef = font_size / Typography::DEFAULT_FONT_SIZE;
    format!("{}rem", px / html_font_size * coef)
}

/// Partial override for one variant
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyVariantOptions {
    pub font_family: Option<String>,
    pub font_weight: Option<u16>,
    pub font_size: Option<String>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<String>,
    pub text_transform: Option<TextTransform>,
}

/// Partial typography override
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyOptions {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub html_font_size: Option<f32>,
    pub font_weight_light: Option<u16>,
    pub font_weight_regular: Option<u16>,
    pub font_weight_medium: Option<u16>,
    pub font_weight_bold: Option<u16>,
    pub h1: Option<TypographyVariantOptions>,
    pub h2: Option<TypographyVariantOptions>,
    pub h3: Option<TypographyVariantOptions>,
    pub h4: Option<TypographyVariantOptions>,
    pub h5: Option<TypographyVariantOptions>,
    pub h6: Option<TypographyVariantOptions>,
    pub subtitle1: Option<TypographyVariantOptions>,
    pub subtitle2: Option<TypographyVariantOptions>,
    pub body1: Option<TypographyVariantOptions>,
    pub body2: Option<TypographyVariantOptions>,
    pub button: Option<TypographyVariantOptions>,
    pub caption: Option<TypographyVariantOptions>,
    pub overline: Option<TypographyVariantOptions>,
}

impl TypographyOptions {
    pub fn variant(&self, token: TypographyToken) -> Option<&TypographyVariantOptions> {
        match token {
            TypographyToken::H1 => self.h1.as_ref(),
            TypographyToken::H2 => self.h2.as_ref(),
            TypographyToken::H3 => self.h3.as_ref(),
            TypographyToken::H4 => self.h4.as_ref(),
            TypographyToken::H5 => self.h5.as_ref(),
            TypographyToken::H6 => self.h6.as_ref(),
            TypographyToken::Subtitle1 => self.subtitle1.as_ref(),
            TypographyToken::Subtitle2 => self.subtitle2.as_ref(),
            TypographyToken::Body1 => self.body1.as_ref(),
            TypographyToken::Body2 => self.body2.as_ref(),
            TypographyToken::Button => self.button.as_ref(),
            TypographyToken::Caption => self.caption.as_ref(),
            TypographyToken::Overline => self.overline.as_ref(),
        }
    }
}
