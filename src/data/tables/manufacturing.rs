// data/tables/manufacturing.rs
//
// Fabrics, machinery and sample products shown on the manufacturing page.

use std::sync::OnceLock;

use crate::data::SeedTable;
use crate::web_app::model::{ManufacturingCategory, ManufacturingItem};

struct ItemSeed {
    id: u32,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    category: ManufacturingCategory,
    features: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
    alt_text: &'static str,
}

impl ItemSeed {
    fn to_item(&self) -> ManufacturingItem {
        ManufacturingItem {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: self.image.to_string(),
            category: self.category,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            specifications: self
                .specifications
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            alt_text: self.alt_text.to_string(),
        }
    }
}

const SEEDS: &[ItemSeed] = &[
    ItemSeed {
        id: 1,
        title: "Breathable Polyester Fabric",
        description: "Lightweight, durable fabric for high-performance activewear with superior moisture-wicking properties.",
        image: "/images/manufacturing/fabrics/breathable-polyester.jpg",
        category: ManufacturingCategory::Fabric,
        features: &[
            "Moisture-wicking technology",
            "UV protection",
            "Anti-odor treatment",
            "Four-way stretch",
            "Quick-dry finish",
        ],
        specifications: &[
            ("Weight", "150 GSM"),
            ("Composition", "92% Polyester, 8% Spandex"),
            ("Width", "150cm"),
            ("Finish", "DWR Coated"),
        ],
        alt_text: "High-quality breathable polyester fabric sample with moisture-wicking technology",
    },
    ItemSeed {
        id: 2,
        title: "Compression Spandex Blend",
        description: "Premium compression fabric designed for muscle support and enhanced performance during intense workouts.",
        image: "/images/manufacturing/fabrics/compression-spandex.jpg",
        category: ManufacturingCategory::Fabric,
        features: &[
            "Graduated compression",
            "Muscle support",
            "Temperature regulation",
            "Anti-chafe finish",
            "High elasticity",
        ],
        specifications: &[
            ("Weight", "180 GSM"),
            ("Composition", "85% Nylon, 15% Spandex"),
            ("Compression", "20-30 mmHg"),
            ("Recovery", "95%"),
        ],
        alt_text: "Premium compression spandex blend fabric with graduated compression technology",
    },
    ItemSeed {
        id: 3,
        title: "Sustainable Cotton Blend",
        description: "Eco-friendly cotton blend fabric perfect for casual sportswear with natural breathability and comfort.",
        image: "/images/manufacturing/fabrics/sustainable-cotton.jpg",
        category: ManufacturingCategory::Fabric,
        features: &[
            "Organic cotton",
            "Natural breathability",
            "Soft hand feel",
            "Biodegradable",
            "Fair trade certified",
        ],
        specifications: &[
            ("Weight", "200 GSM"),
            ("Composition", "70% Organic Cotton, 30% Recycled Polyester"),
            ("Certification", "GOTS, Fair Trade"),
            ("Finish", "Enzyme washed"),
        ],
        alt_text: "Sustainable cotton blend fabric with organic certification and natural breathability",
    },
    ItemSeed {
        id: 4,
        title: "Automated Sewing Machine",
        description: "State-of-the-art computerized sewing machine for precise stitching and consistent quality across all products.",
        image: "/images/manufacturing/machinery/automated-sewing.jpg",
        category: ManufacturingCategory::Machinery,
        features: &[
            "Computerized control",
            "Auto-threading system",
            "Stitch monitoring",
            "Speed control",
            "Quality assurance",
        ],
        specifications: &[
            ("Speed", "5000 SPM"),
            ("Stitch Types", "200+"),
            ("Needle System", "DBx1"),
            ("Control", "Touchscreen"),
        ],
        alt_text: "Modern automated sewing machine with computerized control and precision stitching capabilities",
    },
    ItemSeed {
        id: 5,
        title: "Digital Cutting System",
        description: "Precision digital cutting system for accurate pattern cutting and minimal fabric waste in production.",
        image: "/images/manufacturing/machinery/digital-cutting.jpg",
        category: ManufacturingCategory::Machinery,
        features: &[
            "Laser precision cutting",
            "Pattern optimization",
            "Waste reduction",
            "Multi-layer cutting",
            "Real-time monitoring",
        ],
        specifications: &[
            ("Cutting Speed", "100m/min"),
            ("Precision", "±0.1mm"),
            ("Max Thickness", "50mm"),
            ("Table Size", "3.2m x 1.6m"),
        ],
        alt_text: "Advanced digital cutting system with laser precision for accurate pattern cutting",
    },
    ItemSeed {
        id: 6,
        title: "Quality Control Station",
        description: "Comprehensive quality control station ensuring every product meets our high standards before shipping.",
        image: "/images/manufacturing/machinery/quality-control.jpg",
        category: ManufacturingCategory::Machinery,
        features: &[
            "Automated inspection",
            "Defect detection",
            "Color matching",
            "Size verification",
            "Documentation",
        ],
        specifications: &[
            ("Inspection Speed", "200 pieces/hour"),
            ("Accuracy", "99.9%"),
            ("Camera Resolution", "4K"),
            ("AI Detection", "Enabled"),
        ],
        alt_text: "Quality control station with automated inspection and defect detection capabilities",
    },
    ItemSeed {
        id: 7,
        title: "Performance Running Shirt",
        description: "Sample of our premium running shirt showcasing advanced fabric technology and ergonomic design.",
        image: "/images/manufacturing/samples/running-shirt-sample.jpg",
        category: ManufacturingCategory::SampleProduct,
        features: &[
            "Moisture-wicking fabric",
            "Ergonomic fit",
            "Reflective details",
            "Flatlock seams",
            "UPF 50+ protection",
        ],
        specifications: &[
            ("Fabric", "Breathable Polyester"),
            ("Weight", "150 GSM"),
            ("Fit", "Athletic"),
            ("Features", "Reflective, UV Protection"),
        ],
        alt_text: "Sample performance running shirt with moisture-wicking technology and ergonomic design",
    },
    ItemSeed {
        id: 8,
        title: "Compression Leggings",
        description: "Sample compression leggings demonstrating our advanced fabric technology and precision manufacturing.",
        image: "/images/manufacturing/samples/compression-leggings.jpg",
        category: ManufacturingCategory::SampleProduct,
        features: &[
            "Graduated compression",
            "Seamless construction",
            "High waistband",
            "Pocket design",
            "Squat-proof material",
        ],
        specifications: &[
            ("Fabric", "Compression Spandex"),
            ("Compression", "20-30 mmHg"),
            ("Waist Height", "High-rise"),
            ("Features", "Seamless, Pocket"),
        ],
        alt_text: "Sample compression leggings with graduated compression and seamless construction",
    },
    ItemSeed {
        id: 9,
        title: "Team Jersey Prototype",
        description: "Prototype team jersey showcasing our customization capabilities and professional sports uniform quality.",
        image: "/images/manufacturing/samples/team-jersey.jpg",
        category: ManufacturingCategory::SampleProduct,
        features: &[
            "Custom team colors",
            "Number printing",
            "Mesh construction",
            "Moisture management",
            "Durable stitching",
        ],
        specifications: &[
            ("Fabric", "Performance Mesh"),
            ("Printing", "Sublimation"),
            ("Fit", "Athletic"),
            ("Customization", "Full"),
        ],
        alt_text: "Team jersey prototype with custom colors, number printing, and professional sports uniform quality",
    },
];

pub struct ManufacturingTable;

impl SeedTable for ManufacturingTable {
    type Row = ManufacturingItem;

    fn rows() -> &'static [ManufacturingItem] {
        static ROWS: OnceLock<Vec<ManufacturingItem>> = OnceLock::new();
        ROWS.get_or_init(|| SEEDS.iter().map(ItemSeed::to_item).collect())
    }
}
