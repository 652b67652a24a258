use crate::foundation::core::Rgba8;
use crate::surface::FontFamily;

/// Background family tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundKind {
    /// Diagonal multi-stop gradient.
    FlatGradient,
    /// Soft radial color washes on white.
    Watercolor,
    /// Curved brush strokes over a base color.
    OilPainting,
    /// Pencil lines on paper.
    Sketch,
    /// Large translucent primitive shapes.
    Abstract,
    /// Groovy overlapping circles.
    RetroPattern,
    /// Gold fans on a dark ground.
    ArtDeco,
    /// Aged paper, dashed border and stamp box.
    VintagePostcard,
    /// Instant-photo frame.
    Polaroid,
    /// Layered landscape.
    NatureScene,
    /// Night sky.
    Space,
    /// Scattered motif pattern.
    Pattern,
    /// Location postcard with a landmark silhouette.
    Postcard,
    /// Contemporary graphic styles.
    Modern,
    /// Seasonal scatter scenes.
    Seasonal,
    /// Single flat color.
    Plain,
}

/// Primitive shapes used by scatter routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Disc.
    Circle,
    /// Axis-aligned square (rotatable).
    Square,
    /// Isosceles triangle.
    Triangle,
    /// Rhombus.
    Diamond,
    /// Irregular hexagon-like blob.
    Organic,
}

/// Landscape variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "scene", rename_all = "kebab-case")]
pub enum NatureScene {
    /// Tree silhouettes under a sky gradient.
    Forest {
        /// One color per tree layer, back to front.
        colors: Vec<Rgba8>,
        /// White haze over the lower third.
        misty: bool,
    },
    /// Winding river through a valley.
    River {
        /// River gradient colors.
        colors: Vec<Rgba8>,
        /// Draw the river band.
        flow: bool,
    },
    /// Ridge layers.
    Mountains {
        /// One color per ridge, back to front.
        layers: Vec<Rgba8>,
        /// White caps on the two rear ridges.
        snow_caps: bool,
    },
    /// Vertical sunset sky.
    Sunset {
        /// Sky gradient, top to bottom.
        colors: Vec<Rgba8>,
        /// Sun disc with glow.
        sun: bool,
        /// Foreground hill silhouette color.
        silhouette: Rgba8,
    },
    /// Sea waves under a sky.
    Ocean {
        /// One color per wave band, back to front.
        waves: Vec<Rgba8>,
        /// Gold horizon line.
        horizon: bool,
    },
    /// Dunes under a warm gradient.
    Desert {
        /// Sky-to-sand gradient.
        colors: Vec<Rgba8>,
        /// Dune bands.
        dunes: bool,
    },
}

/// Night-sky variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "scene", rename_all = "kebab-case")]
pub enum SpaceScene {
    /// Deep field with nebula glows.
    Galaxy {
        /// Sky fill.
        background: Rgba8,
        /// Star speckle.
        stars: bool,
        /// Nebula glow colors.
        nebula: Vec<Rgba8>,
    },
    /// Diagonal gradient with planets.
    Cosmos {
        /// Sky gradient.
        colors: Vec<Rgba8>,
        /// Ringed planets.
        planets: bool,
    },
    /// Northern-lights curtains.
    Aurora {
        /// Curtain colors.
        colors: Vec<Rgba8>,
    },
}

/// Scattered motif variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "pattern", rename_all = "kebab-case")]
pub enum PatternScene {
    /// Paired wing ellipses.
    Butterflies {
        /// Ground color.
        background: Rgba8,
        /// Wing colors.
        colors: Vec<Rgba8>,
    },
    /// Petal rings with gold centers.
    Flowers {
        /// Ground color.
        background: Rgba8,
        /// Petal colors.
        colors: Vec<Rgba8>,
    },
    /// Veined leaves over a gradient.
    Leaves {
        /// Ground gradient.
        colors: Vec<Rgba8>,
    },
}

/// Landmark silhouettes drawn on postcards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Landmark {
    /// Paris.
    EiffelTower,
    /// Tokyo.
    MountFuji,
    /// New York.
    Skyline,
    /// Tropical beach.
    PalmBeach,
}

/// Location postcard.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PostcardScene {
    /// Base diagonal gradient.
    pub colors: Vec<Rgba8>,
    /// Landmark overlay.
    pub landmark: Landmark,
    /// Landmark ink color (translucent).
    pub ink: Rgba8,
}

/// Contemporary graphic variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "style", rename_all = "kebab-case")]
pub enum ModernScene {
    /// Tiled grid of random primitives.
    Geometric {
        /// Tile colors.
        colors: Vec<Rgba8>,
    },
    /// Bold scattered primitives.
    Memphis {
        /// Ground color.
        background: Rgba8,
        /// Shape colors.
        shapes: Vec<Rgba8>,
    },
    /// Thin gold rules on white.
    MinimalistGold {
        /// Ground color.
        background: Rgba8,
        /// Rule color.
        accent: Rgba8,
    },
    /// Neon perspective grid.
    NeonGrid {
        /// Ground gradient.
        colors: Vec<Rgba8>,
        /// Neon line colors.
        neon: Vec<Rgba8>,
    },
}

/// Seasonal variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "season", rename_all = "kebab-case")]
pub enum SeasonalScene {
    /// Falling leaves over a warm gradient.
    Autumn {
        /// Ground gradient.
        colors: Vec<Rgba8>,
        /// Scatter leaves.
        leaves: bool,
    },
    /// Snowflakes on a pale sky.
    Winter {
        /// Sky fill.
        background: Rgba8,
        /// Accent colors for drifts.
        colors: Vec<Rgba8>,
        /// Scatter snowflakes.
        snowflakes: bool,
    },
    /// Cherry blossoms over a pastel gradient.
    Spring {
        /// Ground gradient.
        colors: Vec<Rgba8>,
        /// Scatter blossoms.
        blossoms: bool,
    },
}

/// Typed background descriptor; each variant carries exactly what its routine needs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Background {
    /// Diagonal multi-stop gradient.
    FlatGradient {
        /// Stops, spread evenly.
        colors: Vec<Rgba8>,
    },
    /// Single flat color.
    Plain {
        /// Fill color.
        color: Rgba8,
        /// Thin inset border.
        border: bool,
    },
    /// Soft color washes.
    Watercolor {
        /// Wash colors.
        colors: Vec<Rgba8>,
    },
    /// Brush strokes.
    OilPainting {
        /// Canvas base color.
        base: Rgba8,
        /// Stroke colors.
        accents: Vec<Rgba8>,
    },
    /// Pencil lines.
    Sketch {
        /// Paper color.
        paper: Rgba8,
        /// Line color.
        ink: Rgba8,
    },
    /// Primitive shapes.
    Abstract {
        /// Shape colors.
        colors: Vec<Rgba8>,
        /// Shape kinds; each color draws one picked at random.
        shapes: Vec<ShapeKind>,
    },
    /// Groovy circles.
    RetroPattern {
        /// Circle colors.
        colors: Vec<Rgba8>,
    },
    /// Gold fans.
    ArtDeco {
        /// Ground color.
        background: Rgba8,
        /// Gold accent.
        gold: Rgba8,
    },
    /// Vintage postcard.
    VintagePostcard {
        /// Paper color.
        paper: Rgba8,
        /// Stamp box in the top-right corner.
        stamp: bool,
    },
    /// Instant-photo frame.
    Polaroid {
        /// Frame color.
        paper: Rgba8,
    },
    /// Landscape scene.
    NatureScene(NatureScene),
    /// Night sky.
    Space(SpaceScene),
    /// Motif pattern.
    Pattern(PatternScene),
    /// Location postcard.
    Postcard(PostcardScene),
    /// Contemporary graphic.
    Modern(ModernScene),
    /// Seasonal scene.
    Seasonal(SeasonalScene),
}

impl Background {
    /// Family tag of this background.
    pub fn kind(&self) -> BackgroundKind {
        match self {
            Self::FlatGradient { .. } => BackgroundKind::FlatGradient,
            Self::Plain { .. } => BackgroundKind::Plain,
            Self::Watercolor { .. } => BackgroundKind::Watercolor,
            Self::OilPainting { .. } => BackgroundKind::OilPainting,
            Self::Sketch { .. } => BackgroundKind::Sketch,
            Self::Abstract { .. } => BackgroundKind::Abstract,
            Self::RetroPattern { .. } => BackgroundKind::RetroPattern,
            Self::ArtDeco { .. } => BackgroundKind::ArtDeco,
            Self::VintagePostcard { .. } => BackgroundKind::VintagePostcard,
            Self::Polaroid { .. } => BackgroundKind::Polaroid,
            Self::NatureScene(_) => BackgroundKind::NatureScene,
            Self::Space(_) => BackgroundKind::Space,
            Self::Pattern(_) => BackgroundKind::Pattern,
            Self::Postcard(_) => BackgroundKind::Postcard,
            Self::Modern(_) => BackgroundKind::Modern,
            Self::Seasonal(_) => BackgroundKind::Seasonal,
        }
    }

    /// Scene sub-selector for kinds that have one.
    pub fn scene_variant(&self) -> Option<&'static str> {
        Some(match self {
            Self::NatureScene(s) => match s {
                NatureScene::Forest { .. } => "forest",
                NatureScene::River { .. } => "river",
                NatureScene::Mountains { .. } => "mountains",
                NatureScene::Sunset { .. } => "sunset",
                NatureScene::Ocean { .. } => "ocean",
                NatureScene::Desert { .. } => "desert",
            },
            Self::Space(s) => match s {
                SpaceScene::Galaxy { .. } => "galaxy",
                SpaceScene::Cosmos { .. } => "cosmos",
                SpaceScene::Aurora { .. } => "aurora",
            },
            Self::Pattern(s) => match s {
                PatternScene::Butterflies { .. } => "butterflies",
                PatternScene::Flowers { .. } => "flowers",
                PatternScene::Leaves { .. } => "leaves",
            },
            Self::Postcard(p) => match p.landmark {
                Landmark::EiffelTower => "paris",
                Landmark::MountFuji => "tokyo",
                Landmark::Skyline => "newyork",
                Landmark::PalmBeach => "beach",
            },
            Self::Modern(s) => match s {
                ModernScene::Geometric { .. } => "geometric",
                ModernScene::Memphis { .. } => "memphis",
                ModernScene::MinimalistGold { .. } => "minimalist-gold",
                ModernScene::NeonGrid { .. } => "neon-grid",
            },
            Self::Seasonal(s) => match s {
                SeasonalScene::Autumn { .. } => "autumn",
                SeasonalScene::Winter { .. } => "winter",
                SeasonalScene::Spring { .. } => "spring",
            },
            _ => return None,
        })
    }

    /// Ordered colors this background paints with.
    pub fn palette(&self) -> Vec<Rgba8> {
        fn with(first: &[Rgba8], rest: &[Rgba8]) -> Vec<Rgba8> {
            first.iter().chain(rest.iter()).copied().collect()
        }
        match self {
            Self::FlatGradient { colors }
            | Self::Watercolor { colors }
            | Self::Abstract { colors, .. }
            | Self::RetroPattern { colors } => colors.clone(),
            Self::Plain { color, .. } => vec![*color],
            Self::OilPainting { base, accents } => with(&[*base], accents),
            Self::Sketch { paper, ink } => vec![*paper, *ink],
            Self::ArtDeco { background, gold } => vec![*background, *gold],
            Self::VintagePostcard { paper, .. } | Self::Polaroid { paper } => vec![*paper],
            Self::NatureScene(s) => match s {
                NatureScene::Forest { colors, .. }
                | NatureScene::River { colors, .. }
                | NatureScene::Desert { colors, .. } => colors.clone(),
                NatureScene::Mountains { layers, .. } => layers.clone(),
                NatureScene::Sunset {
                    colors, silhouette, ..
                } => with(colors, &[*silhouette]),
                NatureScene::Ocean { waves, .. } => waves.clone(),
            },
            Self::Space(s) => match s {
                SpaceScene::Galaxy {
                    background, nebula, ..
                } => with(&[*background], nebula),
                SpaceScene::Cosmos { colors, .. } | SpaceScene::Aurora { colors } => {
                    colors.clone()
                }
            },
            Self::Pattern(s) => match s {
                PatternScene::Butterflies { background, colors }
                | PatternScene::Flowers { background, colors } => with(&[*background], colors),
                PatternScene::Leaves { colors } => colors.clone(),
            },
            Self::Postcard(p) => with(&p.colors, &[p.ink]),
            Self::Modern(s) => match s {
                ModernScene::Geometric { colors } => colors.clone(),
                ModernScene::Memphis { background, shapes } => with(&[*background], shapes),
                ModernScene::MinimalistGold { background, accent } => vec![*background, *accent],
                ModernScene::NeonGrid { colors, neon } => with(colors, neon),
            },
            Self::Seasonal(s) => match s {
                SeasonalScene::Autumn { colors, .. } | SeasonalScene::Spring { colors, .. } => {
                    colors.clone()
                }
                SeasonalScene::Winter {
                    background, colors, ..
                } => with(&[*background], colors),
            },
        }
    }
}

/// Overlay drawn by the decoration layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    /// Translucent circles and a triangle.
    Geometric,
    /// Corner flourishes.
    Ornamental,
    /// Leaf ellipses.
    Floral,
    /// No overlay.
    #[default]
    None,
}

/// One visual template.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StyleDescriptor {
    /// Template identifier.
    pub id: &'static str,
    /// Background routine and its parameters.
    pub background: Background,
    /// Message font.
    pub font: FontFamily,
    /// Message color.
    pub primary_text: Rgba8,
    /// Salutation color.
    pub secondary_text: Rgba8,
    /// Decoration overlay.
    pub decoration: Decoration,
}

impl StyleDescriptor {
    /// Background family tag.
    pub fn kind(&self) -> BackgroundKind {
        self.background.kind()
    }

    /// Background palette.
    pub fn palette(&self) -> Vec<Rgba8> {
        self.background.palette()
    }
}
