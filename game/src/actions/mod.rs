mod add_plant;
mod buy_item;
mod harvest_crop;
mod harvest_plant;
mod manage_items;
mod move_player;
mod new_day;
mod plant_crop;
mod remove_plant;
mod sell_item;
mod till_soil;
mod untill_soil;
