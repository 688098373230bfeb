//! Derived inline styles for hover states.
//!
//! Hover is tracked as a boolean and the style is recomputed from it, so
//! nothing writes to element styles directly.

/// Glyph style for a technology tile. Idle glyphs use the muted theme color,
/// hovered glyphs take the brand color plus a two-layer glow.
pub fn tech_glyph_style(color: &str, hovered: bool) -> String {
    if hovered {
        format!(
            "color:{c};text-shadow:0 0 15px {c}60, 0 0 30px {c}30",
            c = color
        )
    } else {
        "text-shadow:none".to_string()
    }
}

/// Inner ring tint for a technology tile.
pub fn tech_ring_style(color: &str) -> String {
    format!("box-shadow:inset 0 0 15px {}10", color)
}

/// Background for a gradient icon tile.
pub fn gradient_style(from: &str, to: &str) -> String {
    format!("background-image:linear-gradient(to bottom right, {}, {})", from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_glow_uses_brand_color() {
        assert_eq!(
            tech_glyph_style("#DC382D", true),
            "color:#DC382D;text-shadow:0 0 15px #DC382D60, 0 0 30px #DC382D30"
        );
        assert_eq!(tech_glyph_style("#DC382D", false), "text-shadow:none");
    }

    #[test]
    fn test_hover_round_trip_restores_idle() {
        let idle = tech_glyph_style("#2496ED", false);
        let _ = tech_glyph_style("#2496ED", true);
        assert_eq!(tech_glyph_style("#2496ED", false), idle);
    }

    #[test]
    fn test_gradient_style() {
        assert_eq!(
            gradient_style("#8b5cf6", "#6d28d9"),
            "background-image:linear-gradient(to bottom right, #8b5cf6, #6d28d9)"
        );
        assert_eq!(tech_ring_style("#61DAFB"), "box-shadow:inset 0 0 15px #61DAFB10");
    }
}
