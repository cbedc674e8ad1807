use std::collections::HashMap;
use std::sync::Arc;

use shopkeep_store::MemoryStore;
use shopkeep_workflow::{Catalog, FormOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopkeep_observability::init();

    let addr = std::env::var("SHOPKEEP_ADDR").unwrap_or_else(|_| {
        tracing::warn!("SHOPKEEP_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    // Opened once here, dropped at process shutdown; everything downstream
    // gets a handle, never a global.
    let store = Arc::new(MemoryStore::new());

    if std::env::var("SHOPKEEP_SEED").is_ok() {
        seed_demo(store.clone())?;
        tracing::info!("seeded demo categories and items");
    }

    let app = shopkeep_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Populate a handful of demo records through the regular create workflow,
/// so seeded values get the same normalization as form submissions.
fn seed_demo(store: Arc<MemoryStore>) -> anyhow::Result<()> {
    let catalog = Catalog::new(store);

    let demo: &[(&str, &str, &[(&str, &str, &str, &str)])] = &[
        (
            "One-Handed Weapons",
            "Swords/Daggers/Wands/Sceptres and so on",
            &[("Varunastra", "One handed sword that counts as all weapon types.", "22", "3")],
        ),
        (
            "Rings",
            "Very powerful item stat, you can wear up to 2 rings",
            &[(
                "Kalandra's Touch",
                "This ring will mirror your opposite equipped ring's stats.",
                "44",
                "1",
            )],
        ),
        (
            "Amulets",
            "Neck slot",
            &[("Voll's Devotion", "Cool amulet to wear for your amazing Discharge build.", "10", "1")],
        ),
    ];

    for (name, description, items) in demo {
        let fields: HashMap<String, String> = [
            ("name".to_string(), name.to_string()),
            ("description".to_string(), description.to_string()),
        ]
        .into();
        let FormOutcome::Redirect { id } = catalog.category_create(&fields)? else {
            anyhow::bail!("seed category {name:?} was rejected");
        };

        for (item_name, item_description, price, stock) in *items {
            let fields: HashMap<String, String> = [
                ("name".to_string(), item_name.to_string()),
                ("description".to_string(), item_description.to_string()),
                ("category".to_string(), id.to_string()),
                ("price".to_string(), price.to_string()),
                ("stock".to_string(), stock.to_string()),
            ]
            .into();
            if let FormOutcome::Rejected { errors, .. } = catalog.item_create(&fields)? {
                anyhow::bail!("seed item {item_name:?} was rejected: {errors:?}");
            }
        }
    }
    Ok(())
}
