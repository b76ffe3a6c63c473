use game::api::Action::{HarvestCrop, NextDay, PlantCrop, RemoveCrop};
use game::api::{Action, ActionError, Event};
use game::collections::DictionaryError::NameNotFound;
use game::inventory::Inventory::ItemQuantityChanged;
use game::inventory::InventoryError::{ItemFunctionNotFound, NotEnoughItems};
use game::landscaping::LandscapingError::{InvalidLandSurface, OutOfLand};
use game::landscaping::Surface::{Soil, Untilled};
use game::planting::Planting::{PlantCreated, PlantDestroyed, PlantGrown, PlantHarvested};
use game::planting::PlantingError::{NotReadyToHarvest, PlaceOccupied, PlantNotFound};
use game::planting::Plant;
use game::timing::Timing::DayStarted;

use crate::testing::{GameTestScenario, OUTSIDE};

mod testing;

fn plant_crop(place: [usize; 2], seed: &str) -> Action {
    PlantCrop {
        place,
        seed: seed.to_string(),
    }
}

#[test]
fn test_plant_crop() {
    GameTestScenario::new()
        .given_item("Potato Seed", 1)
        .when_farmer_perform(plant_crop([1, 1], "Potato Seed"))
        .then_events(|given| {
            vec![
                Event::Inventory(vec![ItemQuantityChanged {
                    item: given.item_key("Potato Seed"),
                    quantity: 0,
                }]),
                Event::Planting(vec![PlantCreated {
                    place: [1, 1],
                    kind: given.plant_key("Potato"),
                }]),
            ]
        })
        .then_item("Potato Seed", 0)
        .then_plant_stage([1, 1], 0)
        .then_harvestable([1, 1], false);
}

#[test]
fn test_plant_crop_without_seeds() {
    GameTestScenario::new()
        .when_farmer_perform(plant_crop([1, 1], "Kale Seed"))
        .then_nothing_happened()
        .then_no_plant([1, 1])
        .when_try(plant_crop([1, 1], "Kale Seed"))
        .then_error(|given| {
            ActionError::Inventory(NotEnoughItems {
                item: given.item_key("Kale Seed"),
                required: 1,
                available: 0,
            })
        });
}

#[test]
fn test_plant_crop_on_untilled_place() {
    GameTestScenario::new()
        .given_item("Potato Seed", 2)
        .when_try(plant_crop([0, 0], "Potato Seed"))
        .then_error(|_| {
            ActionError::Landscaping(InvalidLandSurface {
                place: [0, 0],
                actual: Untilled,
                expected: Soil,
            })
        })
        .then_item("Potato Seed", 2)
        .then_no_plant([0, 0]);
}

#[test]
fn test_plant_crop_on_occupied_soil() {
    GameTestScenario::new()
        .given_item("Berry Seed", 1)
        .given_plant("Kale", [1, 1], 2)
        .when_try(plant_crop([1, 1], "Berry Seed"))
        .then_error(|_| ActionError::Planting(PlaceOccupied { place: [1, 1] }))
        .then_item("Berry Seed", 1)
        .then_plant_stage([1, 1], 2);
}

#[test]
fn test_plant_product_instead_of_seed() {
    GameTestScenario::new()
        .given_item("Potato", 1)
        .when_farmer_perform(plant_crop([1, 1], "Potato"))
        .then_nothing_happened()
        .when_try(plant_crop([1, 1], "Potato"))
        .then_error(|_| ActionError::Inventory(ItemFunctionNotFound))
        .then_item("Potato", 1)
        .then_no_plant([1, 1]);
}

#[test]
fn test_plant_unknown_seed() {
    GameTestScenario::new()
        .when_farmer_perform(plant_crop([1, 1], "Carrot Seed"))
        .then_error(|_| {
            ActionError::Knowledge(NameNotFound {
                name: "Carrot Seed".to_string(),
            })
        });
}

#[test]
fn test_crop_grows_one_stage_a_day() {
    GameTestScenario::new()
        .given_plant("Potato", [1, 1], 0)
        .when_farmer_perform(NextDay)
        .then_events(|_| {
            vec![
                Event::Planting(vec![PlantGrown {
                    place: [1, 1],
                    stage: 1,
                }]),
                Event::Timing(vec![DayStarted { day: 1 }]),
            ]
        })
        .then_plant_stage([1, 1], 1)
        .then_harvestable([1, 1], false)
        .when_days_pass(1)
        .then_harvestable([1, 1], false)
        .when_days_pass(1)
        .then_plant_stage([1, 1], 3)
        .then_harvestable([1, 1], true);
}

#[test]
fn test_crop_stops_growing_at_last_stage() {
    GameTestScenario::new()
        .given_plant("Potato", [1, 1], 4)
        .given_plant("Kale", [1, 2], 3)
        .when_farmer_perform(NextDay)
        .then_events(|_| {
            vec![
                Event::Planting(vec![PlantGrown {
                    place: [1, 2],
                    stage: 4,
                }]),
                Event::Timing(vec![DayStarted { day: 1 }]),
            ]
        })
        .when_days_pass(5)
        .then_plant_stage([1, 1], 4)
        .then_plant_stage([1, 2], 5);
}

#[test]
fn test_harvest_immature_crop() {
    GameTestScenario::new()
        .given_plant("Potato", [1, 1], 2)
        .when_farmer_perform(HarvestCrop { place: [1, 1] })
        .then_nothing_happened()
        .then_item("Potato", 0)
        .then_plant_stage([1, 1], 2)
        .when_try(HarvestCrop { place: [1, 1] })
        .then_error(|_| {
            ActionError::Planting(NotReadyToHarvest {
                place: [1, 1],
                stage: 2,
            })
        });
}

#[test]
fn test_harvest_right_after_planting() {
    GameTestScenario::new()
        .given_item("Kale Seed", 1)
        .when_farmer_perform(plant_crop([1, 2], "Kale Seed"))
        .when_farmer_perform(HarvestCrop { place: [1, 2] })
        .then_nothing_happened()
        .then_item("Kale", 0)
        .then_plant_stage([1, 2], 0)
        .when_days_pass(3)
        .when_try(HarvestCrop { place: [1, 2] })
        .then_error(|_| {
            ActionError::Planting(NotReadyToHarvest {
                place: [1, 2],
                stage: 3,
            })
        })
        .then_item("Kale", 0)
        .then_plant_stage([1, 2], 3);
}

#[test]
fn test_harvest_crop_which_does_not_regrow() {
    GameTestScenario::new()
        .given_plant("Potato", [1, 1], 3)
        .when_farmer_perform(HarvestCrop { place: [1, 1] })
        .then_events(|given| {
            vec![
                Event::Planting(vec![PlantHarvested {
                    place: [1, 1],
                    stage: 3,
                }]),
                Event::Inventory(vec![ItemQuantityChanged {
                    item: given.item_key("Potato"),
                    quantity: 1,
                }]),
                Event::Planting(vec![PlantDestroyed { place: [1, 1] }]),
            ]
        })
        .then_item("Potato", 1)
        .then_no_plant([1, 1])
        .then_surface([1, 1], Soil)
        .then_money(50);
}

#[test]
fn test_harvest_crop_which_regrows() {
    GameTestScenario::new()
        .given_item("Berry", 1)
        .given_plant("Berry", [1, 2], 6)
        .when_farmer_perform(HarvestCrop { place: [1, 2] })
        .then_events(|given| {
            vec![
                Event::Planting(vec![PlantHarvested {
                    place: [1, 2],
                    stage: 3,
                }]),
                Event::Inventory(vec![ItemQuantityChanged {
                    item: given.item_key("Berry"),
                    quantity: 3,
                }]),
            ]
        })
        .then_item("Berry", 3)
        .then_plant_stage([1, 2], 3)
        .then_harvestable([1, 2], false)
        .when_days_pass(2)
        .then_harvestable([1, 2], true);
}

#[test]
fn test_harvest_empty_place() {
    GameTestScenario::new()
        .when_try(HarvestCrop { place: [1, 1] })
        .then_error(|_| ActionError::Planting(PlantNotFound { place: [1, 1] }))
        .when_farmer_perform(HarvestCrop { place: OUTSIDE })
        .then_error(|_| ActionError::Landscaping(OutOfLand { place: OUTSIDE }));
}

#[test]
fn test_remove_crop() {
    GameTestScenario::new()
        .given_plant("Kale", [1, 1], 1)
        .when_farmer_perform(RemoveCrop { place: [1, 1] })
        .then_events(|_| vec![Event::Planting(vec![PlantDestroyed { place: [1, 1] }])])
        .then_no_plant([1, 1])
        .then_surface([1, 1], Soil)
        .when_farmer_perform(RemoveCrop { place: [1, 1] })
        .then_nothing_happened();
}

#[test]
fn test_remove_crop_outside_of_land() {
    GameTestScenario::new()
        .when_farmer_perform(RemoveCrop { place: OUTSIDE })
        .then_error(|_| ActionError::Landscaping(OutOfLand { place: OUTSIDE }));
}

#[test]
fn test_add_plant_only_on_empty_soil() {
    GameTestScenario::new()
        .when_game(|game| {
            let kind = game.known.plants.find("Kale").unwrap();
            game.add_plant([0, 0], Plant::new(kind))
        })
        .then_error(|_| {
            ActionError::Landscaping(InvalidLandSurface {
                place: [0, 0],
                actual: Untilled,
                expected: Soil,
            })
        })
        .when_game(|game| {
            let kind = game.known.plants.find("Kale").unwrap();
            game.add_plant([1, 1], Plant::new(kind))
        })
        .then_events(|given| {
            vec![Event::Planting(vec![PlantCreated {
                place: [1, 1],
                kind: given.plant_key("Kale"),
            }])]
        })
        .when_game(|game| {
            let kind = game.known.plants.find("Potato").unwrap();
            game.add_plant([1, 1], Plant::new(kind))
        })
        .then_error(|_| ActionError::Planting(PlaceOccupied { place: [1, 1] }))
        .then_plant_stage([1, 1], 0);
}

#[test]
fn test_harvest_plant_clears_place_of_dead_species() {
    GameTestScenario::new()
        .given_plant("Kale", [1, 1], 4)
        .given_plant("Berry", [1, 2], 5)
        .when_game(|game| {
            let plant = game.planting.get_plant_mut([1, 1]).unwrap();
            assert!(plant.can_harvest());
            plant.harvest();
            game.harvest_plant([1, 1])
        })
        .then_events(|_| vec![Event::Planting(vec![PlantDestroyed { place: [1, 1] }])])
        .then_no_plant([1, 1])
        .when_game(|game| {
            let plant = game.planting.get_plant_mut([1, 2]).unwrap();
            let fruits = plant.harvest();
            assert_eq!(fruits.1, 2);
            game.harvest_plant([1, 2])
        })
        .then_nothing_happened()
        .then_plant_stage([1, 2], 3);
}
