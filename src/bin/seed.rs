//! Seeds a small vehicle catalog. The catalog has no write routes, so this is
//! the only way rows get into it besides direct SQL.

use autoservice_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Makes, configurations, generations, makes, ranges, vehicle_models},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

struct SeedConfiguration {
    engine_capacity: f64,
    engine_power: i32,
    engine_type: &'static str,
    transmission: &'static str,
    drive: &'static str,
}

struct SeedGeneration {
    photo_url: &'static str,
    full_name: &'static str,
    short_name: &'static str,
    vehicle_body: &'static str,
    configurations: &'static [SeedConfiguration],
}

struct SeedModel {
    make: &'static str,
    model: &'static str,
    range: &'static str,
    generations: &'static [SeedGeneration],
}

const CATALOG: &[SeedModel] = &[
    SeedModel {
        make: "Renault",
        model: "Duster",
        range: "Модельный ряд Renault Duster для России",
        generations: &[SeedGeneration {
            photo_url: "https://www.drom.ru/catalog/renault/duster/g_2020_12623/",
            full_name: "Renault Duster (HM)\n11.2020 - 07.2022",
            short_name: "2 поколение",
            vehicle_body: "Джип/SUV 5 дв.",
            configurations: &[
                SeedConfiguration {
                    engine_capacity: 1.3,
                    engine_power: 149,
                    engine_type: "бензин",
                    transmission: "МКПП",
                    drive: "полный привод (4WD)",
                },
                SeedConfiguration {
                    engine_capacity: 1.6,
                    engine_power: 114,
                    engine_type: "бензин",
                    transmission: "МКПП",
                    drive: "передний привод (FF)",
                },
            ],
        }],
    },
    SeedModel {
        make: "Renault",
        model: "Logan",
        range: "Модельный ряд Renault Logan для России",
        generations: &[SeedGeneration {
            photo_url: "https://www.drom.ru/catalog/renault/logan/g_2018_11298/",
            full_name: "Renault Logan (L8)\n07.2018 - 02.2022",
            short_name: "2 поколение, рестайлинг",
            vehicle_body: "Седан",
            configurations: &[SeedConfiguration {
                engine_capacity: 1.6,
                engine_power: 82,
                engine_type: "бензин",
                transmission: "МКПП",
                drive: "передний привод (FF)",
            }],
        }],
    },
    SeedModel {
        make: "Lada",
        model: "Vesta",
        range: "Модельный ряд Lada Vesta",
        generations: &[SeedGeneration {
            photo_url: "https://www.drom.ru/catalog/lada/vesta/g_2015_8873/",
            full_name: "Lada Vesta (2180)\n09.2015 - 02.2023",
            short_name: "1 поколение",
            vehicle_body: "Седан",
            configurations: &[SeedConfiguration {
                engine_capacity: 1.6,
                engine_power: 106,
                engine_type: "бензин",
                transmission: "АКПП",
                drive: "передний привод (FF)",
            }],
        }],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm).await?;

    seed_catalog(&orm).await?;
    tracing::info!("seed completed");
    Ok(())
}

async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let txn = orm.begin().await?;
    for entry in CATALOG {
        let make = match Makes::find()
            .filter(makes::Column::Name.eq(entry.make))
            .one(&txn)
            .await?
        {
            Some(make) => make,
            None => {
                makes::ActiveModel {
                    id: NotSet,
                    name: Set(entry.make.to_string()),
                }
                .insert(&txn)
                .await?
            }
        };

        let exists = vehicle_models::Entity::find()
            .filter(vehicle_models::Column::Name.eq(entry.model))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            tracing::info!(model = entry.model, "already seeded, skipping");
            continue;
        }

        let model = vehicle_models::ActiveModel {
            id: NotSet,
            name: Set(entry.model.to_string()),
            make_id: Set(make.id),
        }
        .insert(&txn)
        .await?;

        let range = ranges::ActiveModel {
            id: NotSet,
            name: Set(entry.range.to_string()),
            model_id: Set(model.id),
        }
        .insert(&txn)
        .await?;

        for seed in entry.generations {
            let generation = generations::ActiveModel {
                id: NotSet,
                photo_url: Set(seed.photo_url.to_string()),
                full_name: Set(seed.full_name.to_string()),
                short_name: Set(seed.short_name.to_string()),
                vehicle_body: Set(seed.vehicle_body.to_string()),
                range_id: Set(range.id),
            }
            .insert(&txn)
            .await?;

            for cfg in seed.configurations {
                configurations::ActiveModel {
                    id: NotSet,
                    engine_capacity: Set(cfg.engine_capacity),
                    engine_power: Set(cfg.engine_power),
                    engine_type: Set(cfg.engine_type.to_string()),
                    transmission: Set(cfg.transmission.to_string()),
                    drive: Set(cfg.drive.to_string()),
                    generation_id: Set(generation.id),
                }
                .insert(&txn)
                .await?;
            }
        }
        tracing::info!(make = entry.make, model = entry.model, "seeded");
    }
    txn.commit().await?;
    Ok(())
}
