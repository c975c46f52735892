//! Merged-view plant detail.

use verdant_core::PlantId;
use verdant_tracker::AppError;
use verdant_tracker::services::PlantService;

use super::Context;

pub fn run(id: &str) -> Result<(), AppError> {
    let ctx = Context::load()?;
    let service = PlantService::new(&ctx.backend, &ctx.catalog);

    let Some(plant) = service.resolve(&PlantId::new(id))? else {
        println!("Plant not found");
        return Ok(());
    };

    println!("{}", plant.name);
    println!("  id:        {}", plant.id);
    println!("  category:  {}", plant.category);
    println!("  care:      {}", plant.care_level);
    println!("  watering:  {}", plant.watering_frequency);
    if !plant.description.is_empty() {
        println!("  about:     {}", plant.description);
    }
    println!("  image:     {}", plant.image_url);
    if let Some(date) = plant.last_watered {
        println!("  last watered: {date}");
    }
    if let Some(date) = plant.next_watering {
        println!("  next watering: {date}");
    }
    if let Some(health) = &plant.health_status {
        println!("  health:    {health}");
    }

    Ok(())
}
