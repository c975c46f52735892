//! Catalog browsing commands.

use clap::Subcommand;

use verdant_tracker::AppError;
use verdant_tracker::catalog::FEATURED_COUNT;
use verdant_tracker::models::Plant;

use super::Context;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List every plant in the catalog
    List,
    /// List the featured plants
    Featured,
}

pub fn run(action: CatalogAction) -> Result<(), AppError> {
    let ctx = Context::load()?;

    let plants = match action {
        CatalogAction::List => ctx.catalog.plants(),
        CatalogAction::Featured => ctx.catalog.featured(FEATURED_COUNT),
    };

    for plant in plants {
        println!("{}", row(plant));
    }

    Ok(())
}

/// One listing line per plant.
pub fn row(plant: &Plant) -> String {
    format!(
        "{:>16}  {:<24} {:<10} care: {:<9} water: {}",
        plant.id, plant.name, plant.category, plant.care_level, plant.watering_frequency
    )
}
