//! File-backed profiles survive process "restarts".

use verdant_core::{CareLevel, Category, PlantId};
use verdant_integration_tests::scratch_profile;
use verdant_tracker::catalog::Catalog;
use verdant_tracker::models::Plant;
use verdant_tracker::services::{AuthService, PlantService};
use verdant_tracker::storage::FileBackend;

fn sample(id: &str, name: &str) -> Plant {
    Plant {
        id: PlantId::new(id),
        name: name.to_owned(),
        category: Category::Bonsai,
        description: String::new(),
        image_url: "https://example.com/plant.jpg".to_owned(),
        care_level: CareLevel::Difficult,
        watering_frequency: "Daily".to_owned(),
        last_watered: None,
        next_watering: None,
        health_status: Some("healthy".to_owned()),
    }
}

#[test]
fn session_and_collection_survive_reopening_the_profile() {
    let profile = scratch_profile();
    let catalog = Catalog::builtin();

    let registered;
    let added;
    {
        // First "run" of the app.
        let backend = FileBackend::new(&profile);
        let auth = AuthService::new(&backend);
        let plants = PlantService::new(&backend, &catalog);

        registered = auth
            .register("Flora", "flora@example.com", None, "Gr0wing")
            .expect("register");
        added = plants.add(sample("77", "Juniper Bonsai")).expect("add");
    }

    {
        // Second "run": fresh backend over the same directory.
        let backend = FileBackend::new(&profile);
        let auth = AuthService::new(&backend);
        let plants = PlantService::new(&backend, &catalog);

        assert_eq!(
            auth.current_user().expect("current"),
            Some(registered.clone())
        );
        assert_eq!(plants.my_plants().expect("list"), vec![added.clone()]);

        auth.logout().expect("logout");
    }

    {
        // Third "run": logout stuck; registered users still there.
        let backend = FileBackend::new(&profile);
        let auth = AuthService::new(&backend);

        assert_eq!(auth.current_user().expect("current"), None);
        assert_eq!(auth.login("flora@example.com").expect("login"), registered);
    }

    std::fs::remove_dir_all(&profile).expect("cleanup");
}

#[test]
fn stores_live_in_separate_files() {
    let profile = scratch_profile();
    let catalog = Catalog::builtin();

    let backend = FileBackend::new(&profile);
    let auth = AuthService::new(&backend);
    let plants = PlantService::new(&backend, &catalog);

    auth.register("Flora", "flora@example.com", None, "Gr0wing")
        .expect("register");
    plants.add(sample("1", "Ficus")).expect("add");

    for file in [
        "plant-tracker-user.json",
        "plant-tracker-registered-users.json",
        "plant-tracker-my-plants.json",
    ] {
        assert!(profile.join(file).is_file(), "{file} should exist");
    }

    std::fs::remove_dir_all(&profile).expect("cleanup");
}
