use serde::Serialize;

/// The kernels compiled into this build, and the SIMD target features it was compiled for.
///
/// Everything here is fixed at build time by Cargo features and `-C target-feature`; nothing
/// inspects the running CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub lanes4: bool,
    pub lanes8: bool,
    pub half8: bool,
    pub target_sse: bool,
    pub target_avx: bool,
    pub target_f16c: bool,
    pub target_neon: bool,
}

impl Capabilities {
    pub const fn of_build() -> Self {
        Capabilities {
            lanes4: cfg!(feature = "lanes4"),
            lanes8: cfg!(feature = "lanes8"),
            half8: cfg!(feature = "half8"),
            target_sse: cfg!(target_feature = "sse"),
            target_avx: cfg!(target_feature = "avx"),
            target_f16c: cfg!(target_feature = "f16c"),
            target_neon: cfg!(target_feature = "neon"),
        }
    }

    pub fn describe(&self) -> String {
        let mut kernels = Vec::new();
        if self.lanes4 {
            kernels.push("4 x f32");
        }
        if self.lanes8 {
            kernels.push("8 x f32");
        }
        if self.half8 {
            kernels.push("8 x f16 -> f32");
        }

        let mut target = Vec::new();
        for (enabled, name) in [
            (self.target_sse, "SSE"),
            (self.target_avx, "AVX"),
            (self.target_f16c, "F16C"),
            (self.target_neon, "NEON"),
        ] {
            if enabled {
                target.push(name);
            }
        }

        let kernels = if kernels.is_empty() {
            "scalar only".to_string()
        } else {
            kernels.join(", ")
        };
        let target = if target.is_empty() {
            "none".to_string()
        } else {
            target.join(" ")
        };
        format!("lanes: {kernels}; target features: {target}")
    }
}

/// Human readable summary of [`Capabilities::of_build`].
pub fn describe_selected_lane_widths() -> String {
    Capabilities::of_build().describe()
}
