use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wayfare::config::WayfareConfig;
use wayfare::error::ApiError;
use wayfare::tooling::cli::{BookingCommands, CliContext, Commands, ConfigCommands};

fn context(root: &Path) -> CliContext {
    let mut config = WayfareConfig::default();
    config.storage.data_dir = Some(root.join("data"));
    CliContext::with_config(root.to_path_buf(), config).unwrap()
}

fn create(name: &str, amount: f64) -> Commands {
    Commands::Booking {
        command: BookingCommands::Create {
            name: name.to_string(),
            email: "guest@example.com".to_string(),
            phone: "17123456".to_string(),
            country: None,
            guests: 2,
            amount,
            note: None,
            visit_date: Some("2026-04-12".to_string()),
            format: "json".to_string(),
        },
    }
}

fn created_id(cli: &CliContext, name: &str, amount: f64) -> String {
    let output = cli.execute(&create(name, amount)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    parsed["id"].as_str().unwrap().to_string()
}

fn list(status: Option<&str>, page: Option<usize>, limit: Option<usize>) -> Commands {
    Commands::Booking {
        command: BookingCommands::List {
            status: status.map(str::to_string),
            search: None,
            page,
            limit,
            format: "json".to_string(),
        },
    }
}

#[test]
fn create_json_contract_has_record_fields() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());

    let output = cli.execute(&create("Jigme", 320.0)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed.get("id").and_then(|v| v.as_str()).is_some());
    assert_eq!(parsed["sequenceCode"], "DLB000001");
    assert_eq!(parsed["status"], "Pending");
    assert_eq!(parsed["visitDate"], "2026-04-12");
    assert!(temp.path().join("data").join("bookings.json").exists());
}

#[test]
fn list_json_contract_has_page_fields() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    for i in 0..3 {
        created_id(&cli, &format!("Guest {}", i), 100.0);
    }

    let output = cli.execute(&list(None, Some(2), Some(2))).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 3);
    assert_eq!(parsed["pages"], 2);
    assert_eq!(parsed["page"], 2);
    assert_eq!(parsed["limit"], 2);
    assert_eq!(parsed["records"].as_array().unwrap().len(), 1);
}

#[test]
fn list_rejects_zero_page_and_oversized_limit() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());

    assert!(matches!(
        cli.execute(&list(None, Some(0), None)),
        Err(ApiError::InvalidArgument(_))
    ));
    assert!(matches!(
        cli.execute(&list(None, None, Some(0))),
        Err(ApiError::InvalidArgument(_))
    ));
    assert!(matches!(
        cli.execute(&list(None, None, Some(1000))),
        Err(ApiError::InvalidArgument(_))
    ));
    assert!(matches!(
        cli.execute(&list(Some("shipped"), None, None)),
        Err(ApiError::InvalidArgument(_))
    ));
}

#[test]
fn update_status_then_count_and_stats() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    let id = created_id(&cli, "Dechen", 100.0);
    created_id(&cli, "Yeshi", 200.0);
    created_id(&cli, "Zangmo", 300.0);

    let output = cli
        .execute(&Commands::Booking {
            command: BookingCommands::Update {
                id: id.clone(),
                status: Some("confirmed".to_string()),
                name: None,
                email: None,
                phone: None,
                country: None,
                guests: None,
                amount: None,
                note: None,
                visit_date: None,
                format: "json".to_string(),
            },
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["status"], "Confirmed");

    let count = cli
        .execute(&Commands::Booking {
            command: BookingCommands::Count {
                status: Some("pending".to_string()),
            },
        })
        .unwrap();
    assert_eq!(count, "2");

    let stats = cli
        .execute(&Commands::Booking {
            command: BookingCommands::Stats {
                format: "json".to_string(),
            },
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stats).unwrap();
    assert_eq!(parsed["total"], 3);
    assert_eq!(parsed["confirmed"], 1);
    assert_eq!(parsed["totalRevenue"], 100.0);
    assert_eq!(parsed["averageValue"], 200);
}

#[test]
fn update_without_changes_is_rejected() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    let id = created_id(&cli, "Idle", 10.0);

    let result = cli.execute(&Commands::Booking {
        command: BookingCommands::Update {
            id,
            status: None,
            name: None,
            email: None,
            phone: None,
            country: None,
            guests: None,
            amount: None,
            note: None,
            visit_date: None,
            format: "text".to_string(),
        },
    });
    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
}

#[test]
fn show_and_delete_report_missing_ids() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    let id = created_id(&cli, "Gone", 10.0);

    let shown = cli
        .execute(&Commands::Booking {
            command: BookingCommands::Show {
                id: id.clone(),
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(shown.contains("DLB000001"));

    let deleted = cli
        .execute(&Commands::Booking {
            command: BookingCommands::Delete {
                id: id.clone(),
                yes: true,
            },
        })
        .unwrap();
    assert!(deleted.contains(&id));

    assert!(matches!(
        cli.execute(&Commands::Booking {
            command: BookingCommands::Show {
                id: id.clone(),
                format: "text".to_string(),
            },
        }),
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        cli.execute(&Commands::Booking {
            command: BookingCommands::Delete { id, yes: true },
        }),
        Err(ApiError::NotFound(_))
    ));
}

#[test]
fn corrupt_store_surfaces_as_an_error() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data").join("bookings.json"), "not json").unwrap();

    let result = cli.execute(&list(None, None, None));
    assert!(matches!(result, Err(ApiError::Store(_))));
}

#[test]
fn store_override_points_at_another_file() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path()).with_store_path(Some("elsewhere.json".into()));
    created_id(&cli, "Moved", 1.0);

    assert!(temp.path().join("elsewhere.json").exists());
    assert!(!temp.path().join("data").join("bookings.json").exists());
}

#[test]
fn config_show_renders_toml() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());

    let output = cli
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(output.contains("[listing]"));
    assert!(output.contains("default_limit = 10"));
    assert!(output.contains("bookings.json"));
}

#[test]
fn update_with_empty_value_clears_visit_date() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    let id = created_id(&cli, "Clear Date", 60.0);

    let output = cli
        .execute(&Commands::Booking {
            command: BookingCommands::Update {
                id,
                status: None,
                name: None,
                email: None,
                phone: None,
                country: None,
                guests: None,
                amount: None,
                note: None,
                visit_date: Some(String::new()),
                format: "json".to_string(),
            },
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed.get("visitDate").is_none());
}
