use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaPreset {
    pub name: &'static str,
    pub c: Complex,
}

/// The parameter the view opens with.
pub const BASELINE: JuliaPreset = JuliaPreset {
    name: "Baseline",
    c: Complex::new(-0.7, 0.27015),
};

/// Parameters suggested next to the input fields.
pub const FAVOURITES: [JuliaPreset; 5] = [
    JuliaPreset {
        name: "Dendrite spiral",
        c: Complex::new(-0.40, 0.60),
    },
    JuliaPreset {
        name: "Cauliflower",
        c: Complex::new(0.28, 0.01),
    },
    JuliaPreset {
        name: "Rabbit arms",
        c: Complex::new(-0.70, -0.30),
    },
    JuliaPreset {
        name: "Seahorse valley",
        c: Complex::new(-0.84, -0.23),
    },
    JuliaPreset {
        name: "Dragon",
        c: Complex::new(-0.80, 0.16),
    },
];

/// Favourites as the plain text shown to users, e.g. `(-0.40,0.60), (0.28,0.01)`.
#[must_use]
pub fn favourites_text() -> String {
    FAVOURITES
        .iter()
        .map(|preset| format!("({:.2},{:.2})", preset.c.real, preset.c.imag))
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn favourite(index: usize) -> Option<JuliaPreset> {
    FAVOURITES.get(index).copied()
}
