/// Width in logical pixels below which the layout switches to the narrow preset
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

/// Hard-coded inline style values picked by viewport class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub page_padding: &'static str,
    pub card_padding: &'static str,
    pub title_font_size: &'static str,
}

impl ViewportClass {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    /// Same as `from_width`; an unknown width (no window yet) counts as wide
    pub fn from_window_width(width: Option<f64>, breakpoint: f64) -> Self {
        width.map_or(ViewportClass::Wide, |w| Self::from_width(w, breakpoint))
    }

    pub fn is_narrow(self) -> bool {
        self == ViewportClass::Narrow
    }

    pub fn style_preset(self) -> StylePreset {
        match self {
            ViewportClass::Narrow => StylePreset {
                page_padding: "16px",
                card_padding: "20px",
                title_font_size: "2rem",
            },
            ViewportClass::Wide => StylePreset {
                page_padding: "32px",
                card_padding: "32px",
                title_font_size: "3rem",
            },
        }
    }
}
