/// Surface reflectance for the fixed lighting model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub emission: [f32; 4],
    pub shininess: f32,
}

impl Material {
    /// The reflectance every mesh starts with.
    pub const DEFAULT: Material = Material {
        ambient: [0.2, 0.2, 0.2, 1.0],
        diffuse: [0.8, 0.8, 0.8, 1.0],
        specular: [0.0, 0.0, 0.0, 1.0],
        emission: [0.0, 0.0, 0.0, 1.0],
        shininess: 0.0,
    };

    /// Red plastic for the lamp base and arms.
    pub const RED_PLASTIC: Material = Material {
        ambient: [1.0, 0.2, 0.2, 1.0],
        diffuse: [0.2, 0.2, 0.2, 1.0],
        specular: [0.1, 0.1, 0.1, 1.0],
        emission: [0.0, 0.0, 0.0, 1.0],
        shininess: 0.1,
    };

    /// Gold for the joint, the cone and the switch.
    pub const GOLD: Material = Material {
        ambient: [0.24725, 0.1995, 0.0745, 1.0],
        diffuse: [0.75164, 0.60648, 0.60648, 1.0],
        specular: [0.628281, 0.555802, 0.366065, 1.0],
        emission: [0.0, 0.0, 0.0, 1.0],
        shininess: 0.4,
    };

    /// Self-lit bulb drawn where a switched-on light sits.
    pub const BULB: Material = Material {
        ambient: [0.0, 0.0, 0.0, 1.0],
        diffuse: [0.0, 0.0, 0.0, 1.0],
        specular: [0.0, 0.0, 0.0, 1.0],
        emission: [1.0, 1.0, 0.85, 1.0],
        shininess: 0.0,
    };
}

impl Default for Material {
    fn default() -> Self {
        Self::DEFAULT
    }
}
