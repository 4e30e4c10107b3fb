//! TypeScript type generation.
//!
//! Exports a `.ts` definition for every request and response type of the
//! API. Runs as a test so it is compiled only with `cargo test`.

#[cfg(test)]
mod tests {
    use std::{env, path::Path};

    use ts_rs::TS;

    #[test]
    fn generate_typescript_types() {
        // CLIMA_TS_OUTPUT_DIR wins; otherwise ../ts-bindings
        let output_dir_str = match env::var("CLIMA_TS_OUTPUT_DIR") {
            Ok(env_dir) => {
                println!("Using TypeScript output directory from CLIMA_TS_OUTPUT_DIR: {}", env_dir);
                env_dir
            }
            Err(_) => "../ts-bindings".to_string(),
        };

        let output_dir = Path::new(&output_dir_str);
        std::fs::create_dir_all(output_dir).expect("Failed to create output directory");

        // Remove stale bindings so renamed types do not linger
        for entry in std::fs::read_dir(output_dir).expect("Failed to read output directory") {
            let path = entry.expect("Failed to read directory entry").path();
            if path.extension().and_then(|s| s.to_str()) == Some("ts") {
                std::fs::remove_file(&path)
                    .unwrap_or_else(|e| panic!("Failed to remove {:?}: {}", path, e));
            }
        }

        unsafe {
            env::set_var("TS_RS_EXPORT_DIR", output_dir);
        }

        use crate::{
            api::{
                response::{CreatedResponse, ErrorResponse, MessageResponse},
                status::HealthStatus,
            },
            models::*,
        };

        Room::export().expect("Failed to export Room type");
        NewRoom::export().expect("Failed to export NewRoom type");
        RoomChanges::export().expect("Failed to export RoomChanges type");

        Equipment::export().expect("Failed to export Equipment type");
        NewEquipment::export().expect("Failed to export NewEquipment type");
        EquipmentChanges::export().expect("Failed to export EquipmentChanges type");

        Command::export().expect("Failed to export Command type");
        NewCommand::export().expect("Failed to export NewCommand type");

        Schedule::export().expect("Failed to export Schedule type");
        NewSchedule::export().expect("Failed to export NewSchedule type");

        LogEntry::export().expect("Failed to export LogEntry type");
        NewLogEntry::export().expect("Failed to export NewLogEntry type");
        LogEntryChanges::export().expect("Failed to export LogEntryChanges type");

        Permission::export().expect("Failed to export Permission type");
        NewPermission::export().expect("Failed to export NewPermission type");
        PermissionChanges::export().expect("Failed to export PermissionChanges type");

        User::export().expect("Failed to export User type");
        UserInput::export().expect("Failed to export UserInput type");

        Relation::export().expect("Failed to export Relation type");
        NewRelation::export().expect("Failed to export NewRelation type");

        Protocol::export().expect("Failed to export Protocol type");
        NewProtocol::export().expect("Failed to export NewProtocol type");

        ErrorResponse::export().expect("Failed to export ErrorResponse type");
        MessageResponse::export().expect("Failed to export MessageResponse type");
        CreatedResponse::export().expect("Failed to export CreatedResponse type");
        HealthStatus::export().expect("Failed to export HealthStatus type");

        println!("TypeScript types generated successfully in {:?}", output_dir);
    }
}
