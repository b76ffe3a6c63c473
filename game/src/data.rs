use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::collections::{DictionaryError, Sequence};
use crate::inventory::{Function, FunctionsQuery, ItemKey, ItemKind};
use crate::landscaping::{Land, Surface};
use crate::math::Place;
use crate::model::{FarmMap, Knowledge, Rules};
use crate::planting::{PlantKey, PlantKind};

pub const DEFAULT_KNOWLEDGE: &str = include_str!("../../assets/knowledge.json");

#[derive(Debug, Deserialize)]
struct KnowledgeData {
    items: Vec<ItemData>,
    crops: Vec<CropData>,
    #[serde(default)]
    rules: Rules,
}

#[derive(Debug, Deserialize)]
struct ItemData {
    name: String,
    #[serde(default)]
    buy_price: Option<u32>,
    sell_price: u32,
}

#[derive(Debug, Deserialize)]
struct CropData {
    name: String,
    seed: String,
    product: String,
    stages: u8,
    maturity: u8,
    #[serde(rename = "yield")]
    fruits: u32,
    #[serde(default)]
    regrows: bool,
    #[serde(default)]
    regrowth: u8,
}

impl Knowledge {
    pub fn standard() -> Result<Self, DataError> {
        Self::parse(DEFAULT_KNOWLEDGE)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        info!("Begin game knowledge loading from {:?}", path.as_ref());
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, DataError> {
        let data: KnowledgeData = serde_json::from_str(text)?;
        let mut known = Knowledge {
            rules: data.rules,
            ..Default::default()
        };

        let mut items_id = Sequence::default();
        let mut item_keys = HashMap::new();
        for item in &data.items {
            let key = items_id.one(ItemKey);
            if item_keys.insert(item.name.clone(), key).is_some() {
                return Err(DictionaryError::NameDuplicated {
                    name: item.name.clone(),
                }
                .into());
            }
        }
        let find_item = |name: &str| {
            item_keys
                .get(name)
                .copied()
                .ok_or(DictionaryError::NameNotFound {
                    name: name.to_string(),
                })
        };

        let mut plants_id = Sequence::default();
        let mut functions: HashMap<ItemKey, Vec<Function>> = HashMap::new();
        for crop in data.crops {
            if crop.maturity > crop.stages || (crop.regrows && crop.regrowth > crop.stages) {
                return Err(DataError::InvalidCrop { name: crop.name });
            }
            if crop.regrows && crop.regrowth >= crop.maturity {
                warn!("Crop {} is ready to harvest right after harvest", crop.name);
            }
            let id = plants_id.one(PlantKey);
            let seed = find_item(&crop.seed)?;
            let product = find_item(&crop.product)?;
            let seed_functions = functions.entry(seed).or_default();
            if seed_functions.as_seeds().is_ok() {
                return Err(DataError::SeedShared {
                    seed: crop.seed,
                    crop: crop.name,
                });
            }
            seed_functions.push(Function::Seeding(id));
            let kind = PlantKind {
                id,
                name: crop.name.clone(),
                stages: crop.stages,
                maturity: crop.maturity,
                product,
                fruits: crop.fruits,
                regrowth: crop.regrows.then_some(crop.regrowth),
            };
            known.plants.insert(id, crop.name, kind)?;
        }

        for item in data.items {
            let id = find_item(&item.name)?;
            let item_functions = functions.remove(&id).unwrap_or_default();
            if item.buy_price.is_some() && item_functions.as_seeds().is_err() {
                return Err(DataError::PricedNonSeed { name: item.name });
            }
            let kind = ItemKind {
                id,
                name: item.name.clone(),
                functions: item_functions,
                buy_price: item.buy_price,
                sell_price: item.sell_price,
            };
            known.items.insert(id, item.name, kind)?;
        }

        for name in known.rules.items.keys() {
            known.items.find(name)?;
        }
        info!(
            "Loaded {} items and {} crops",
            known.items.len(),
            known.plants.len()
        );
        Ok(known)
    }
}

impl FarmMap {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        info!("Load farm map from {:?}", path.as_ref());
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses one character per tile, one line per row.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, DataError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let columns = match lines.first() {
            Some(line) => line.chars().count(),
            None => return Err(DataError::EmptyMap),
        };
        let mut surface = Vec::with_capacity(lines.len() * columns);
        let mut start = None;
        for (row, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != columns {
                return Err(DataError::IrregularMap {
                    row,
                    expected: columns,
                    actual,
                });
            }
            for (column, code) in line.chars().enumerate() {
                let place = [row, column];
                if code == FarmMap::START {
                    if start.is_some() {
                        warn!("Start marker repeated at {:?}", place);
                    }
                    start = Some(place);
                    surface.push(Surface::Untilled);
                    continue;
                }
                let tile = Surface::from_code(code)
                    .ok_or(DataError::UnknownSurfaceCode { place, code })?;
                surface.push(tile);
            }
        }
        Ok(FarmMap {
            land: Land::new(lines.len(), columns, surface),
            start,
        })
    }
}

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Inconsistency(DictionaryError),
    InvalidCrop {
        name: String,
    },
    SeedShared {
        seed: String,
        crop: String,
    },
    PricedNonSeed {
        name: String,
    },
    EmptyMap,
    IrregularMap {
        row: usize,
        expected: usize,
        actual: usize,
    },
    UnknownSurfaceCode {
        place: Place,
        code: char,
    },
    StartOutOfLand {
        start: Place,
    },
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(error) => write!(f, "unable to read data: {}", error),
            DataError::Json(error) => write!(f, "malformed knowledge: {}", error),
            DataError::Inconsistency(error) => write!(f, "inconsistent knowledge: {:?}", error),
            DataError::InvalidCrop { name } => write!(f, "crop {} has invalid stages", name),
            DataError::SeedShared { seed, crop } => {
                write!(f, "crop {} uses seed {} of another crop", crop, seed)
            }
            DataError::PricedNonSeed { name } => {
                write!(f, "item {} has buy price but is not a seed", name)
            }
            DataError::EmptyMap => write!(f, "map is empty"),
            DataError::IrregularMap {
                row,
                expected,
                actual,
            } => write!(
                f,
                "map row {} has {} tiles, expected {}",
                row, actual, expected
            ),
            DataError::UnknownSurfaceCode { place, code } => {
                write!(f, "unknown surface {:?} at {:?}", code, place)
            }
            DataError::StartOutOfLand { start } => write!(f, "start {:?} is out of land", start),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
