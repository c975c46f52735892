//! Personal collection commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use verdant_core::{CareLevel, Category, PlantId};
use verdant_tracker::AppError;
use verdant_tracker::models::Plant;
use verdant_tracker::services::PlantService;

use super::Context;

#[derive(Subcommand)]
pub enum PlantsAction {
    /// List your collection
    List,
    /// Add a plant to your collection
    Add(AddArgs),
    /// Update a plant in your collection
    Update(UpdateArgs),
    /// Remove a plant from your collection
    Remove {
        /// Plant id
        id: String,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Plant name
    #[arg(long)]
    name: String,

    /// Category (succulent, fern, flowering, tropical, bonsai)
    #[arg(long, default_value = "tropical")]
    category: Category,

    /// Free-text description
    #[arg(long, default_value = "")]
    description: String,

    /// Image URL
    #[arg(long)]
    image_url: String,

    /// Care level (easy, moderate, difficult)
    #[arg(long, default_value = "easy")]
    care_level: CareLevel,

    /// Watering frequency (e.g. "Weekly")
    #[arg(long)]
    watering_frequency: String,

    /// Last watered date (YYYY-MM-DD)
    #[arg(long)]
    last_watered: Option<NaiveDate>,

    /// Next watering date (YYYY-MM-DD)
    #[arg(long)]
    next_watering: Option<NaiveDate>,

    /// Health note
    #[arg(long, default_value = "healthy")]
    health_status: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Plant id
    id: String,

    /// Plant name
    #[arg(long)]
    name: Option<String>,

    /// Category (succulent, fern, flowering, tropical, bonsai)
    #[arg(long)]
    category: Option<Category>,

    /// Free-text description
    #[arg(long)]
    description: Option<String>,

    /// Image URL
    #[arg(long)]
    image_url: Option<String>,

    /// Care level (easy, moderate, difficult)
    #[arg(long)]
    care_level: Option<CareLevel>,

    /// Watering frequency (e.g. "Weekly")
    #[arg(long)]
    watering_frequency: Option<String>,

    /// Last watered date (YYYY-MM-DD)
    #[arg(long)]
    last_watered: Option<NaiveDate>,

    /// Next watering date (YYYY-MM-DD)
    #[arg(long)]
    next_watering: Option<NaiveDate>,

    /// Health note
    #[arg(long)]
    health_status: Option<String>,
}

pub fn run(action: PlantsAction) -> Result<(), AppError> {
    let ctx = Context::load()?;
    ctx.require_login()?;
    let service = PlantService::new(&ctx.backend, &ctx.catalog);

    match action {
        PlantsAction::List => {
            let plants = service.my_plants()?;
            if plants.is_empty() {
                println!("Your collection is empty. Add a plant with `verdant plants add`.");
            }
            for plant in &plants {
                println!("{}", super::catalog::row(plant));
            }
        }
        PlantsAction::Add(args) => {
            let plant = Plant {
                id: PlantId::generate(),
                name: args.name,
                category: args.category,
                description: args.description,
                image_url: args.image_url,
                care_level: args.care_level,
                watering_frequency: args.watering_frequency,
                last_watered: args.last_watered,
                next_watering: args.next_watering,
                health_status: Some(args.health_status),
            };
            let added = service.add(plant)?;
            println!("{} has been added to your collection!", added.name);
            println!("id: {}", added.id);
        }
        PlantsAction::Update(args) => {
            let id = PlantId::new(args.id);
            let mut plant = service
                .my_plants()?
                .into_iter()
                .find(|p| p.id == id)
                .ok_or(AppError::Collection(
                    verdant_tracker::services::CollectionError::PlantNotFound,
                ))?;

            if let Some(name) = args.name {
                plant.name = name;
            }
            if let Some(category) = args.category {
                plant.category = category;
            }
            if let Some(description) = args.description {
                plant.description = description;
            }
            if let Some(image_url) = args.image_url {
                plant.image_url = image_url;
            }
            if let Some(care_level) = args.care_level {
                plant.care_level = care_level;
            }
            if let Some(watering_frequency) = args.watering_frequency {
                plant.watering_frequency = watering_frequency;
            }
            if let Some(last_watered) = args.last_watered {
                plant.last_watered = Some(last_watered);
            }
            if let Some(next_watering) = args.next_watering {
                plant.next_watering = Some(next_watering);
            }
            if let Some(health_status) = args.health_status {
                plant.health_status = Some(health_status);
            }

            service.update(&plant)?;
            println!("Your plant details have been saved.");
        }
        PlantsAction::Remove { id } => {
            service.remove(&PlantId::new(id))?;
            println!("Your plant has been removed from your collection.");
        }
    }

    Ok(())
}
