// Static page content: feature gallery, specification rows, cube faces.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub details: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: &'static str,
}

/// Percent coordinates of a spec hotspot over the car image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeFaces {
    pub front: &'static str,
    pub back: &'static str,
    pub right: &'static str,
    pub left: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
}

pub const CUBE_FACES: CubeFaces = CubeFaces {
    front: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=800&q=80",
    back: "https://preview.free3d.com/img/2019/11/2408237387009230411/2qagmggn.jpg",
    right: "https://images.unsplash.com/photo-1605559424843-9e4c228bf1c2?w=800&q=80",
    left: "https://images.unsplash.com/photo-1606664515524-ed2f786a0bd6?w=800&q=80",
    top: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=800&q=80",
    bottom: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=800&q=80",
};

impl CubeFaces {
    /// `(face class, image url)` pairs in front/back/right/left/top/bottom order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("front", self.front),
            ("back", self.back),
            ("right", self.right),
            ("left", self.left),
            ("top", self.top),
            ("bottom", self.bottom),
        ]
        .into_iter()
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "engine",
        title: "V8 Engine",
        description: "4.0L Biturbo V8 engine with 469 horsepower",
        image: "https://preview.free3d.com/img/2019/11/2408237387009230411/kzu5y3jp.jpg",
        details: "The heart of the C63 AMG is its powerful 4.0-liter V8 biturbo engine. This masterpiece delivers 469 horsepower and 650 Nm of torque, providing breathtaking acceleration and an unforgettable driving experience.",
    },
    Feature {
        icon: "transmission",
        title: "AMG SPEEDSHIFT",
        description: "9-speed automatic transmission",
        image: "https://preview.free3d.com/img/2019/11/2408237387009230411/86nigfzt.jpg",
        details: "The AMG SPEEDSHIFT MCT 9-speed transmission offers lightning-fast gear changes. With multiple driving modes, you can customize the shift characteristics to match your driving style perfectly.",
    },
    Feature {
        icon: "suspension",
        title: "AMG RIDE CONTROL",
        description: "Adaptive damping system",
        image: "https://www.mercedes-benz.ca/content/dam/mb-nafta/us/amg/performance/suspensions/2018-AMG-THEME-PAGE-PERFORMANCE-SUSPENSION-002-DR.jpg",
        details: "The adaptive damping system automatically adjusts to road conditions and driving style. Experience the perfect balance between comfort and sporty performance in every situation.",
    },
    Feature {
        icon: "modes",
        title: "AMG DYNAMIC SELECT",
        description: "5 driving modes: Comfort, Sport, Sport+, Individual, Race",
        image: "https://hips.hearstapps.com/autoweek/assets/s3fs-public/18c0583_031.jpg?resize=980:*",
        details: "Choose from five distinct driving modes: Comfort for daily driving, Sport and Sport+ for spirited driving, Individual for personalized settings, and Race mode for track performance.",
    },
    Feature {
        icon: "interior",
        title: "Premium Interior",
        description: "AMG Performance seats and luxury materials",
        image: "https://preview.free3d.com/img/2019/11/2408237387009230411/evng9tus.jpg",
        details: "The interior combines luxury with sporty functionality. AMG Performance seats provide excellent support, while premium materials create an atmosphere of refined elegance.",
    },
    Feature {
        icon: "sound",
        title: "Burmester Sound System",
        description: "13-speaker premium sound system",
        image: "https://preview.free3d.com/img/2019/11/2408237387009230411/lxtzocsv.jpg",
        details: "Experience concert-hall quality sound with the Burmester High-End 3D Surround Sound System. 13 high-performance speakers deliver crystal-clear audio throughout the cabin.",
    },
];

pub const SPECIFICATIONS: &[SpecRow] = &[
    SpecRow { label: "Engine", value: "4.0L V8 Biturbo" },
    SpecRow { label: "Power", value: "469 HP (350 kW)" },
    SpecRow { label: "Torque", value: "650 Nm" },
    SpecRow { label: "0-100 km/h", value: "4.0 seconds" },
    SpecRow { label: "Top Speed", value: "250 km/h (electronically limited)" },
    SpecRow { label: "Transmission", value: "AMG SPEEDSHIFT MCT 9G" },
    SpecRow { label: "Drivetrain", value: "AMG Performance (RWD)" },
    SpecRow { label: "Fuel Consumption", value: "10.8 L/100 km" },
    SpecRow { label: "CO2 Emissions", value: "247 g/km" },
    SpecRow { label: "Weight", value: "1,825 kg" },
];

// One hotspot per SPECIFICATIONS row, same order.
const SPEC_POINTS: [SpecPoint; 10] = [
    SpecPoint { x: 15.0, y: 30.0 },
    SpecPoint { x: 25.0, y: 20.0 },
    SpecPoint { x: 35.0, y: 25.0 },
    SpecPoint { x: 50.0, y: 15.0 },
    SpecPoint { x: 65.0, y: 20.0 },
    SpecPoint { x: 75.0, y: 30.0 },
    SpecPoint { x: 20.0, y: 60.0 },
    SpecPoint { x: 50.0, y: 70.0 },
    SpecPoint { x: 70.0, y: 65.0 },
    SpecPoint { x: 40.0, y: 80.0 },
];

const SPEC_POINT_FALLBACK: SpecPoint = SpecPoint { x: 50.0, y: 50.0 };

#[inline]
pub fn feature(index: usize) -> Option<&'static Feature> {
    FEATURES.get(index)
}

#[inline]
pub fn spec_point_position(index: usize) -> SpecPoint {
    SPEC_POINTS.get(index).copied().unwrap_or(SPEC_POINT_FALLBACK)
}
