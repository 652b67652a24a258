use std::collections::HashMap;
use std::sync::LazyLock;

use super::model::{
    Background, Decoration, Landmark, ModernScene, NatureScene, PatternScene, PostcardScene,
    SeasonalScene, ShapeKind, SpaceScene, StyleDescriptor,
};
use crate::foundation::core::Rgba8;
use crate::surface::FontFamily;

pub(crate) struct Catalog {
    pub(crate) entries: Vec<StyleDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    pub(crate) fn get(&self, id: &str) -> Option<&StyleDescriptor> {
        self.index.get(id).map(|&i| &self.entries[i])
    }
}

pub(crate) static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = build();
    let index = entries
        .iter()
        .enumerate()
        .map(|(i, d)| (d.id, i))
        .collect();
    Catalog { entries, index }
});

const WHITE: Rgba8 = Rgba8::WHITE;

fn hexes(v: &[u32]) -> Vec<Rgba8> {
    v.iter().map(|&c| Rgba8::hex(c)).collect()
}

fn style(
    id: &'static str,
    background: Background,
    font: FontFamily,
    primary: Rgba8,
    secondary: Rgba8,
) -> StyleDescriptor {
    StyleDescriptor {
        id,
        background,
        font,
        primary_text: primary,
        secondary_text: secondary,
        decoration: Decoration::None,
    }
}

fn decorated(mut d: StyleDescriptor, decoration: Decoration) -> StyleDescriptor {
    d.decoration = decoration;
    d
}

fn build() -> Vec<StyleDescriptor> {
    use FontFamily::{BebasNeue, Caveat, DancingScript, Inter, PlayfairDisplay};

    let h = Rgba8::hex;
    vec![
        decorated(
            style(
                "modern",
                Background::FlatGradient {
                    colors: hexes(&[0x667eea, 0x764ba2]),
                },
                Inter,
                WHITE,
                Rgba8::rgba(255, 255, 255, 204),
            ),
            Decoration::Geometric,
        ),
        decorated(
            style(
                "vintage",
                Background::FlatGradient {
                    colors: hexes(&[0xf2994a, 0xf2c94c]),
                },
                PlayfairDisplay,
                h(0x2d3436),
                h(0x636e72),
            ),
            Decoration::Ornamental,
        ),
        style(
            "minimal",
            Background::Plain {
                color: WHITE,
                border: true,
            },
            Inter,
            h(0x2d3436),
            h(0x636e72),
        ),
        decorated(
            style(
                "romantic",
                Background::FlatGradient {
                    colors: hexes(&[0xff6b9d, 0xc44569]),
                },
                DancingScript,
                WHITE,
                h(0xffe0ec),
            ),
            Decoration::Floral,
        ),
        style(
            "professional",
            Background::FlatGradient {
                colors: hexes(&[0x2d3748, 0x4a5568]),
            },
            Inter,
            WHITE,
            h(0xe2e8f0),
        ),
        style(
            "watercolor",
            Background::Watercolor {
                colors: hexes(&[0xFFE5E5, 0xFFE5F1, 0xFFF0F5, 0xE5E5FF]),
            },
            DancingScript,
            h(0x4a4a4a),
            h(0x7a7a7a),
        ),
        style(
            "oilPainting",
            Background::OilPainting {
                base: h(0x8B7355),
                accents: hexes(&[0xCD853F, 0xDEB887, 0xF4A460]),
            },
            PlayfairDisplay,
            WHITE,
            h(0xF5DEB3),
        ),
        style(
            "sketch",
            Background::Sketch {
                paper: h(0xF5F5DC),
                ink: h(0x2F4F4F),
            },
            Caveat,
            h(0x2F4F4F),
            h(0x696969),
        ),
        style(
            "abstractArt",
            Background::Abstract {
                colors: hexes(&[0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0xFFA07A]),
                shapes: vec![ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Organic],
            },
            BebasNeue,
            WHITE,
            h(0xF0F0F0),
        ),
        style(
            "retro70s",
            Background::RetroPattern {
                colors: hexes(&[0xFF6B35, 0xF77737, 0xC4491D, 0x8B2500]),
            },
            BebasNeue,
            h(0xFFF8DC),
            h(0xFAEBD7),
        ),
        style(
            "artDeco",
            Background::ArtDeco {
                background: h(0x1C1C1C),
                gold: h(0xFFD700),
            },
            PlayfairDisplay,
            h(0xFFD700),
            h(0xF0E68C),
        ),
        style(
            "vintagePostcard",
            Background::VintagePostcard {
                paper: h(0xFFF8E7),
                stamp: true,
            },
            Caveat,
            h(0x8B4513),
            h(0xA0522D),
        ),
        style(
            "polaroid",
            Background::Polaroid { paper: h(0xFAFAFA) },
            Caveat,
            h(0x333333),
            h(0x666666),
        ),
        style(
            "forest",
            Background::NatureScene(NatureScene::Forest {
                colors: hexes(&[0x228B22, 0x006400, 0x2E8B57, 0x3CB371]),
                misty: true,
            }),
            Inter,
            WHITE,
            h(0xE0FFE0),
        ),
        style(
            "river",
            Background::NatureScene(NatureScene::River {
                colors: hexes(&[0x4682B4, 0x5F9EA0, 0x87CEEB, 0xB0E0E6]),
                flow: true,
            }),
            DancingScript,
            WHITE,
            h(0xE0FFFF),
        ),
        style(
            "mountains",
            Background::NatureScene(NatureScene::Mountains {
                layers: hexes(&[0x8B7D7B, 0xA0A0A0, 0xC0C0C0, 0xE0E0E0]),
                snow_caps: true,
            }),
            PlayfairDisplay,
            WHITE,
            h(0xF0F8FF),
        ),
        style(
            "sunset",
            Background::NatureScene(NatureScene::Sunset {
                colors: hexes(&[0xFF512F, 0xF09819, 0xFDB813, 0xFFE5B4]),
                sun: true,
                silhouette: h(0x4A2C2A),
            }),
            Inter,
            WHITE,
            h(0xFFF0E0),
        ),
        style(
            "ocean",
            Background::NatureScene(NatureScene::Ocean {
                waves: hexes(&[0x006994, 0x0099CC, 0x00BFFF, 0x87CEEB]),
                horizon: true,
            }),
            DancingScript,
            WHITE,
            h(0xF0FFFF),
        ),
        style(
            "desert",
            Background::NatureScene(NatureScene::Desert {
                colors: hexes(&[0xEDC9AF, 0xF4A460, 0xCD853F, 0x8B7355]),
                dunes: true,
            }),
            BebasNeue,
            WHITE,
            h(0xFFF8DC),
        ),
        style(
            "galaxy",
            Background::Space(SpaceScene::Galaxy {
                background: h(0x000428),
                stars: true,
                nebula: hexes(&[0x004e92, 0x6B46C1, 0x9B59B6]),
            }),
            Inter,
            WHITE,
            h(0xE0E0FF),
        ),
        style(
            "cosmos",
            Background::Space(SpaceScene::Cosmos {
                colors: hexes(&[0x24243e, 0x302b63, 0x0f0c29]),
                planets: true,
            }),
            BebasNeue,
            h(0x00ffff),
            h(0xff00ff),
        ),
        style(
            "aurora",
            Background::Space(SpaceScene::Aurora {
                colors: hexes(&[0x00C9FF, 0x92FE9D, 0xFC466B, 0x3F5EFB]),
            }),
            Inter,
            WHITE,
            h(0xE0FFE0),
        ),
        style(
            "butterflies",
            Background::Pattern(PatternScene::Butterflies {
                background: h(0xFFF0F5),
                colors: hexes(&[0xFF69B4, 0xFFB6C1, 0xFFC0CB, 0xFF1493]),
            }),
            DancingScript,
            h(0x8B008B),
            h(0x9370DB),
        ),
        style(
            "flowers",
            Background::Pattern(PatternScene::Flowers {
                background: h(0xFFFAF0),
                colors: hexes(&[0xFF69B4, 0xFF1493, 0xC71585, 0xDB7093]),
            }),
            Caveat,
            h(0x8B008B),
            h(0x9370DB),
        ),
        style(
            "leaves",
            Background::Pattern(PatternScene::Leaves {
                colors: hexes(&[0xa8e6cf, 0xdcedc1, 0xb7e4c7]),
            }),
            Inter,
            h(0x2d5016),
            h(0x3d6526),
        ),
        style(
            "paris",
            Background::Postcard(PostcardScene {
                colors: hexes(&[0xE6E6FA, 0xDDA0DD, 0xD8BFD8]),
                landmark: Landmark::EiffelTower,
                ink: Rgba8::rgba(75, 0, 130, 77),
            }),
            PlayfairDisplay,
            h(0x4B0082),
            h(0x8B008B),
        ),
        style(
            "tokyo",
            Background::Postcard(PostcardScene {
                colors: hexes(&[0xFFB6C1, 0xFFC0CB, 0xFFDAB9]),
                landmark: Landmark::MountFuji,
                ink: Rgba8::rgba(139, 0, 0, 51),
            }),
            Inter,
            h(0x8B0000),
            h(0xDC143C),
        ),
        style(
            "newyork",
            Background::Postcard(PostcardScene {
                colors: hexes(&[0x4169E1, 0x1E90FF, 0x00BFFF]),
                landmark: Landmark::Skyline,
                ink: Rgba8::rgba(65, 105, 225, 77),
            }),
            BebasNeue,
            WHITE,
            h(0xF0F8FF),
        ),
        style(
            "beach",
            Background::Postcard(PostcardScene {
                colors: hexes(&[0x00b894, 0x00cec9, 0x81ecec]),
                landmark: Landmark::PalmBeach,
                ink: Rgba8::rgba(139, 69, 19, 102),
            }),
            Caveat,
            WHITE,
            h(0xffeaa7),
        ),
        style(
            "geometric",
            Background::Modern(ModernScene::Geometric {
                colors: hexes(&[0x6C5CE7, 0xA29BFE, 0x74B9FF, 0xA29BFE]),
            }),
            Inter,
            WHITE,
            h(0xFFEAA7),
        ),
        style(
            "memphis",
            Background::Modern(ModernScene::Memphis {
                background: h(0xFFE5E5),
                shapes: hexes(&[0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0x96CEB4]),
            }),
            BebasNeue,
            h(0x2D3436),
            h(0x636E72),
        ),
        style(
            "minimalistGold",
            Background::Modern(ModernScene::MinimalistGold {
                background: WHITE,
                accent: h(0xFFD700),
            }),
            PlayfairDisplay,
            h(0xFFD700),
            h(0xF0E68C),
        ),
        style(
            "neonCity",
            Background::Modern(ModernScene::NeonGrid {
                colors: hexes(&[0x0F0C29, 0x24243e, 0x302b63]),
                neon: hexes(&[0x00ffff, 0xff00ff, 0xffff00]),
            }),
            BebasNeue,
            h(0x00ffff),
            h(0xff00ff),
        ),
        style(
            "autumn",
            Background::Seasonal(SeasonalScene::Autumn {
                colors: hexes(&[0xD2691E, 0xFF8C00, 0xFF7F50, 0xFFD700]),
                leaves: true,
            }),
            PlayfairDisplay,
            h(0x8B4513),
            h(0xA0522D),
        ),
        style(
            "winter",
            Background::Seasonal(SeasonalScene::Winter {
                background: h(0xF0F8FF),
                colors: hexes(&[0xB0E0E6, 0xADD8E6, 0x87CEEB]),
                snowflakes: true,
            }),
            Inter,
            h(0x4682B4),
            h(0x5F9EA0),
        ),
        style(
            "spring",
            Background::Seasonal(SeasonalScene::Spring {
                colors: hexes(&[0xFFE5E5, 0xFFE5F1, 0xE5FFE5, 0xE5F1FF]),
                blossoms: true,
            }),
            DancingScript,
            h(0xFF69B4),
            h(0xFFB6C1),
        ),
    ]
}
