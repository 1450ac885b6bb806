//! Static site content.
//!
//! Copy, figures and geometry rendered by the app. Everything here is
//! `'static` data plus a few lookup helpers; nothing is loaded at runtime.

// ============================================================================
// Rich text
// ============================================================================

/// A run of paragraph text, optionally emphasized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Run {
    Plain(&'static str),
    Strong(&'static str),
}

// ============================================================================
// Field trials
// ============================================================================

/// Which field trial a sub-page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Hpi,
    ClimateSmart,
}

impl FieldKey {
    pub fn path(&self) -> &'static str {
        match self {
            FieldKey::Hpi => "/fields/hpi",
            FieldKey::ClimateSmart => "/fields/climate-smart",
        }
    }

    pub fn trial(&self) -> &'static FieldTrial {
        match self {
            FieldKey::Hpi => &FIELD_TRIALS[0],
            FieldKey::ClimateSmart => &FIELD_TRIALS[1],
        }
    }

    pub fn panel(&self) -> &'static FieldPanel {
        match self {
            FieldKey::Hpi => &HPI_PANEL,
            FieldKey::ClimateSmart => &CLIMATE_SMART_PANEL,
        }
    }
}

/// Summary card shown in the home page field scroller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTrial {
    pub key: FieldKey,
    pub label: &'static str,
    pub overline: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub static FIELD_TRIALS: [FieldTrial; 2] = [
    FieldTrial {
        key: FieldKey::Hpi,
        label: "HPI Sorghum Diversity Trial",
        overline: "HPI · Genetic Diversity",
        summary: "Five-year sorghum diversity trial: 344 varieties across 13.5 acres (St. Charles, MO). Expertly managed, instrumented, and deeply sampled.",
        bullets: &[
            "Agronomic traits: height, lodging, flowering time, biomass",
            "Digital data: UAV, Licor, environmental sensors",
            "Deep soil sampling for root biomass & soil conditions",
            "Goal: gene–trait patterns; deeper, robust roots & carbon sequestration",
        ],
        tags: &["5 years", "344 varieties", "13.5 acres", "UAV & sensors"],
    },
    FieldTrial {
        key: FieldKey::ClimateSmart,
        label: "Climate Smart Field",
        overline: "Sorghum × Maize × Practices",
        summary: "Five-year ‘climate-smart’ comparison: two sorghum hybrids vs maize under conventional and sustainable practice combinations.",
        bullets: &[
            "Treatments: no-till, precision N, legume cover crop",
            "Controls: till, standard N, no cover",
            "Data: minirhizotron, UAV, soil T/θ, environment, yields, grain composition",
            "Goal: practice × crop impacts on yield & quality",
        ],
        tags: &["5 years", "13.5 acres", "Root imaging", "UAV & sensors"],
    },
];

// ============================================================================
// Field panels (sub-pages)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Definition {
    pub term: &'static str,
    pub desc: &'static str,
}

/// One photo in a field gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

impl MediaItem {
    /// Caption for the lightbox, falling back to the alt text.
    pub fn label(&self) -> &'static str {
        if self.caption.trim().is_empty() {
            self.alt
        } else {
            self.caption.trim()
        }
    }
}

/// Everything a field sub-page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldPanel {
    /// DOM id of the panel section
    pub id: &'static str,
    pub location: &'static str,
    pub title: &'static str,
    pub intro: &'static [Run],
    pub hero_image: Option<(&'static str, &'static str)>,
    pub stats: [Stat; 4],
    pub left: &'static [Definition],
    pub right: &'static [Definition],
    pub tags: &'static [&'static str],
    pub gallery_title: &'static str,
    pub gallery_blurb: &'static str,
    pub media: &'static [MediaItem],
}

const GALLERY_BLURB: &str = "UAV imagery, minirhizotron roots, soil probes, and edge devices, captured on site to illustrate instrumentation and outcomes.";

pub static HPI_PANEL: FieldPanel = FieldPanel {
    id: "hpi",
    location: "Location · St. Charles, Missouri",
    title: "Genetic Diversity Field Trial",
    intro: &[
        Run::Plain("Our genetic diversity field trial spans "),
        Run::Strong("5 years"),
        Run::Plain(" and includes "),
        Run::Strong("344 varieties of sorghum"),
        Run::Plain(". This "),
        Run::Strong("13.5‑acre"),
        Run::Plain(" experiment in "),
        Run::Strong("St. Charles, MO"),
        Run::Plain(" is managed by "),
        Run::Strong("expert farmers"),
        Run::Plain(". Researchers take agronomic measurements such as "),
        Run::Strong("plant height"),
        Run::Plain(", "),
        Run::Strong("lodging"),
        Run::Plain(", "),
        Run::Strong("flowering time"),
        Run::Plain(", and "),
        Run::Strong("biomass"),
        Run::Plain(". Digital data is collected via "),
        Run::Strong("UAVs"),
        Run::Plain(", "),
        Run::Strong("LI‑COR instruments"),
        Run::Plain(", and "),
        Run::Strong("environmental sensors"),
        Run::Plain(". The goal is to review year‑by‑year data to find "),
        Run::Strong("trait patterns associated with specific genes"),
        Run::Plain(". We’re interested in varieties with "),
        Run::Strong("deeper, more robust root systems"),
        Run::Plain(" that enhance "),
        Run::Strong("carbon sequestration"),
        Run::Plain(". "),
        Run::Strong("Deep soil sampling"),
        Run::Plain(" at the end of the growing season provides data about "),
        Run::Strong("soil conditions"),
        Run::Plain(" and "),
        Run::Strong("root biomass"),
        Run::Plain(". Our research scientists will analyze this extensive field dataset to gain new "),
        Run::Strong("insights into sorghum genetics"),
        Run::Plain(" and inform future "),
        Run::Strong("sorghum breeding programs"),
        Run::Plain("."),
    ],
    hero_image: None,
    stats: [
        Stat { label: "Duration", value: "5 years" },
        Stat { label: "Area", value: "13.5 acres" },
        Stat { label: "Varieties", value: "344 sorghum varieties" },
        Stat { label: "Management", value: "Expert farmers" },
    ],
    left: &[
        Definition {
            term: "Trial Scope",
            desc: "Genetic diversity study across 344 sorghum varieties.",
        },
        Definition {
            term: "Duration & Site",
            desc: "Five years on the same 13.5 acres in St. Charles, MO.",
        },
        Definition {
            term: "Management",
            desc: "Experiment managed by expert farmers.",
        },
        Definition {
            term: "Agronomic Measurements",
            desc: "Plant height, lodging, flowering time, biomass.",
        },
    ],
    right: &[
        Definition {
            term: "Technology In Use",
            desc: "UAVs; LI-COR instruments; environmental sensors; end-of-season deep soil sampling.",
        },
        Definition {
            term: "Data Collected",
            desc: "Agronomic traits, digital datasets from UAVs and LI-COR, environmental sensor streams, and deep soil sampling for soil conditions and root biomass.",
        },
        Definition {
            term: "Objective",
            desc: "Review yearly data to identify trait patterns linked to specific genes; prioritize deeper, more robust root systems that enhance carbon sequestration; generate insights to guide future sorghum breeding.",
        },
    ],
    tags: &[
        "344 varieties",
        "Plant height",
        "Lodging",
        "Flowering time",
        "Biomass",
        "UAV imagery",
        "LI-COR data",
        "Environmental sensors",
        "Deep soil sampling",
        "Carbon sequestration",
    ],
    gallery_title: "Photos & video from the HPI testbed",
    gallery_blurb: GALLERY_BLURB,
    media: &HPI_MEDIA,
};

pub static CLIMATE_SMART_PANEL: FieldPanel = FieldPanel {
    id: "climate-smart",
    location: "Location · St. Charles, Missouri",
    title: "Climate Smart Field",
    intro: &[
        Run::Plain("Funded by the National Sorghum Producers Climate Smart grant, this five-year field trial compares "),
        Run::Strong("two commercial sorghum hybrids"),
        Run::Plain(" with "),
        Run::Strong("maize"),
        Run::Plain(" under different management practices. A conventional control uses "),
        Run::Strong("tilling"),
        Run::Plain(", "),
        Run::Strong("standard nitrogen"),
        Run::Plain(", and "),
        Run::Strong("no cover crop"),
        Run::Plain(". Most fields are combinations of conventional practices with more sustainable options: "),
        Run::Strong("no-till"),
        Run::Plain(" (planting into last season’s residue without plowing or disking to keep soil undisturbed), "),
        Run::Strong("precision nitrogen"),
        Run::Plain(" (applying nitrogen fertilizer at the right rate, place, and time for each field/zone based on tests or sensor/yield data), or a "),
        Run::Strong("legume cover crop"),
        Run::Plain(" (sowing non-harvested legumes, like clover or vetch, between cash crops to biologically fix nitrogen, protect and build soil, and suppress weeds). One field applies only the sustainable practices."),
    ],
    hero_image: Some(("/assets/fields/climate-smart.webp", "Climate Smart field overview")),
    stats: [
        Stat { label: "Duration", value: "5 years" },
        Stat { label: "Area", value: "13.5 acres" },
        Stat { label: "Crops", value: "Sorghum hybrids & Maize" },
        Stat { label: "Funding", value: "National Sorghum Producers" },
    ],
    left: &[
        Definition {
            term: "Comparison",
            desc: "Two commercial sorghum hybrids vs maize under multiple practice combinations.",
        },
        Definition {
            term: "Control (Conventional)",
            desc: "Tilling, standard nitrogen, no cover crop.",
        },
        Definition {
            term: "Sustainable Practices",
            desc: "No-till • Precision nitrogen • Legume cover crop. Most fields combine conventional + sustainable; one field uses only the sustainable set.",
        },
        Definition {
            term: "Timeline & Site",
            desc: "Five years on the same 13.5 acres in St. Charles, MO.",
        },
    ],
    right: &[
        Definition {
            term: "Technology In Use",
            desc: "PheNode (Agrela Ecosystems); Wireless sensors (Agrela Ecosystems); FieldDock (Shakoor Lab); Minirhizotron root imaging.",
        },
        Definition {
            term: "Data Collected",
            desc: "Below-ground root images (minirhizotron), UAV imagery, soil temperature & moisture (soil sensors), environmental sensors, harvest yields, soil analysis, grain composition.",
        },
        Definition {
            term: "Objective",
            desc: "Determine how practice combinations influence yield and grain quality over time.",
        },
    ],
    tags: &[
        "No-till",
        "Precision N",
        "Legume cover crop",
        "UAV imagery",
        "Minirhizotron roots",
        "Soil T/θ",
        "Env. sensors",
        "Harvest yields",
        "Soil analysis",
        "Grain composition",
    ],
    gallery_title: "Photos & video from the Climate Smart testbed",
    gallery_blurb: GALLERY_BLURB,
    media: &CLIMATE_SMART_MEDIA,
};

const UAV_CANOPY: (&str, &str) = (
    "UAV canopy mosaic over sorghum plots",
    "UAV Imagery · Sorghum Canopy",
);
const ROOTS: (&str, &str) = ("Minirhizotron root image", "Minirhizotron · Root Architecture");
const SOIL_PROBE: (&str, &str) = (
    "Wireless soil sensor probe installed in field",
    "Wireless Soil Sensor · Installation",
);
const PHENODE: (&str, &str) = (
    "PheNode weather & phenotyping node",
    "PheNode · Weather & Phenotyping Node",
);
const FIELDDOCK: (&str, &str) = ("FieldDock and UAV drone", "FieldDock · Edge Gateway");
const DRONE_CANOPY: (&str, &str) = ("FieldDock and UAV drone", "UAV Imagery · Sorghum Canopy");

const fn media(src: &'static str, (alt, caption): (&'static str, &'static str)) -> MediaItem {
    MediaItem { src, alt, caption }
}

pub const HPI_MEDIA: [MediaItem; 12] = [
    media("/assets/gallery/hpi/hpi1.webp", UAV_CANOPY),
    media("/assets/gallery/hpi/hpi2.webp", UAV_CANOPY),
    media("/assets/gallery/hpi/hpi3.webp", ROOTS),
    media("/assets/gallery/hpi/hpi4.webp", SOIL_PROBE),
    media("/assets/gallery/hpi/hpi5.webp", PHENODE),
    media("/assets/gallery/hpi/hpi6.webp", FIELDDOCK),
    media("/assets/gallery/hpi/hpi7.webp", DRONE_CANOPY),
    media("/assets/gallery/hpi/hpi8.webp", DRONE_CANOPY),
    media("/assets/gallery/hpi/hpi9.webp", DRONE_CANOPY),
    media("/assets/gallery/hpi/hpi10.webp", DRONE_CANOPY),
    media("/assets/gallery/hpi/hpi11.webp", DRONE_CANOPY),
    media("/assets/gallery/hpi/hpi12.webp", DRONE_CANOPY),
];

pub const CLIMATE_SMART_MEDIA: [MediaItem; 8] = [
    media("/assets/gallery/cs/cs1.webp", UAV_CANOPY),
    media("/assets/gallery/cs/cs2.webp", UAV_CANOPY),
    media("/assets/gallery/cs/cs3.webp", ROOTS),
    media("/assets/gallery/cs/cs4.webp", SOIL_PROBE),
    media("/assets/gallery/cs/cs5.webp", PHENODE),
    media("/assets/gallery/cs/cs6.webp", FIELDDOCK),
    media("/assets/gallery/cs/cs7.webp", DRONE_CANOPY),
    media("/assets/gallery/cs/cs8.webp", DRONE_CANOPY),
];

// ============================================================================
// Intro chips
// ============================================================================

/// Phrases lit in sequence by the intro section.
pub const INTRO_CHIPS: [&str; 5] = [
    "Dr. Nadia Shakoor",
    "Donald Danforth Plant Science Center",
    "advanced sensors",
    "data analytics",
    "5G networks",
];

// ============================================================================
// Technology showcase
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechItem {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    /// Offset from the centre circle in px on wide layouts
    pub orbit: (f64, f64),
}

impl TechItem {
    /// CSS transform placing the card on its orbit.
    pub fn orbit_transform(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px))",
            self.orbit.0, self.orbit.1
        )
    }
}

pub const TECH_ITEMS: [TechItem; 4] = [
    TechItem {
        title: "PheNode (Agrela Ecosystems)",
        blurb: "Solar-powered micro-weather and plant phenotyping node. Streams atmospheric & canopy context and acts as a local gateway.",
        image: "/assets/tech/phenode.webp",
        alt: "PheNode device",
        orbit: (-240.0, -150.0),
    },
    TechItem {
        title: "Wireless Soil & Environment Sensors",
        blurb: "LoRa-based probes for soil temperature & moisture and environmental conditions. Low-power, field-scale coverage.",
        image: "/assets/tech/sensors.webp",
        alt: "Wireless soil & environment sensors",
        orbit: (240.0, -150.0),
    },
    TechItem {
        title: "FieldDock (Shakoor Lab)",
        blurb: "Lightweight edge gateway that aggregates research-grade instruments and forwards to NextG/MEC for real-time analytics.",
        image: "/assets/tech/fielddock.webp",
        alt: "FieldDock gateway",
        orbit: (-240.0, 140.0),
    },
    TechItem {
        title: "Minirhizotron Imaging",
        blurb: "Transparent tubes with a scanning camera to observe root architecture dynamics below ground. Non-destructive, time-series.",
        image: "/assets/tech/minirhizo.webp",
        alt: "Minirhizotron imaging",
        orbit: (240.0, 140.0),
    },
];

// ============================================================================
// Data flow diagram
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowNode {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub small: bool,
}

impl FlowNode {
    pub fn radius(&self) -> f64 {
        if self.small {
            18.0
        } else {
            26.0
        }
    }

    /// Vertical offset of the label above the node centre.
    pub fn label_offset(&self) -> f64 {
        if self.small {
            -34.0
        } else {
            -40.0
        }
    }
}

/// A curved link between two nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowPath {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl FlowPath {
    /// SVG path data: a cubic that bows up out of `from` and into `to`.
    pub fn d(&self) -> String {
        let (x1, y1) = self.from;
        let (x2, y2) = self.to;
        let mx = (x1 + x2) / 2.0;
        format!(
            "M{},{} C {},{} {},{} {},{}",
            x1,
            y1,
            mx,
            y1 - 40.0,
            mx,
            y2 + 40.0,
            x2,
            y2
        )
    }
}

pub const FLOW_NODES: [FlowNode; 5] = [
    FlowNode { x: 130.0, y: 310.0, label: "LoRa sensors", small: false },
    FlowNode { x: 320.0, y: 240.0, label: "PheNode / FieldDock", small: false },
    FlowNode { x: 520.0, y: 170.0, label: "5G gNB", small: false },
    FlowNode { x: 680.0, y: 170.0, label: "MEC (xApps)", small: false },
    FlowNode { x: 860.0, y: 90.0, label: "Core / Cloud", small: true },
];

pub const FLOW_PATHS: [FlowPath; 4] = [
    FlowPath { from: (150.0, 300.0), to: (320.0, 240.0) },
    FlowPath { from: (340.0, 220.0), to: (520.0, 170.0) },
    FlowPath { from: (540.0, 170.0), to: (680.0, 170.0) },
    FlowPath { from: (700.0, 150.0), to: (860.0, 100.0) },
];

/// Insights flowing back from the core to the field.
pub const RETURN_PATH: &str = "M860,110 C700,260 380,360 160,330";

// ============================================================================
// Fit matrix
// ============================================================================

pub const MATRIX_ROWS: [&str; 7] = [
    "Open & integrated networks (Open RAN)",
    "LoRa → 5G data transport (PDUs)",
    "MEC analytics via xApps",
    "RIS / UAV augmentation",
    "Coverage at research & roadside scale",
    "Energy, scalability, security tradeoffs",
    "Flexible, structured/unstructured data flow",
];

pub const MATRIX_COLUMNS: [&str; 6] = [
    "HPI diversity field",
    "Climate Smart field",
    "Existing LoRa sensors",
    "UAV imaging",
    "FieldDock gateway",
    "Partner access (Danforth/Agrela)",
];

/// `(row, column)` cells where an asset serves an objective.
pub const MATRIX_CHECKS: [(usize, usize); 17] = [
    (0, 2),
    (0, 5),
    (1, 2),
    (1, 4),
    (2, 4),
    (2, 5),
    (3, 3),
    (3, 5),
    (4, 0),
    (4, 1),
    (4, 3),
    (5, 0),
    (5, 1),
    (5, 5),
    (6, 0),
    (6, 1),
    (6, 4),
];

pub fn is_checked(row: usize, column: usize) -> bool {
    MATRIX_CHECKS.contains(&(row, column))
}

/// Column labels checked for `row`, in column order.
pub fn hits_for_row(row: usize) -> Vec<&'static str> {
    MATRIX_COLUMNS
        .iter()
        .enumerate()
        .filter(|(column, _)| is_checked(row, *column))
        .map(|(_, label)| *label)
        .collect()
}

/// Hovered cell of the desktop matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatrixHover {
    row: Option<usize>,
    column: Option<usize>,
}

impl MatrixHover {
    /// Hovering a row label highlights the row only.
    pub fn enter_row(&mut self, row: usize) {
        self.row = Some(row);
        self.column = None;
    }

    pub fn enter_cell(&mut self, row: usize, column: usize) {
        self.row = Some(row);
        self.column = Some(column);
    }

    pub fn leave(&mut self) {
        *self = Self::default();
    }

    /// Cells in the hovered row or column are highlighted.
    pub fn is_highlighted(&self, row: usize, column: usize) -> bool {
        self.row == Some(row) || self.column == Some(column)
    }
}

// ============================================================================
// Footer
// ============================================================================

pub const DEFAULT_CONTACT_EMAIL: &str = "shakoorlab.danforth@gmail.com";
