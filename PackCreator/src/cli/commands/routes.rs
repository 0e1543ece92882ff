//! CLI command for previewing vehicle file routing

use std::path::PathBuf;

use crate::carpack::plan_vehicle_routes;
use crate::config::PersistedConfig;

pub fn execute(vehicles: &[PathBuf], dropped_only: bool) -> anyhow::Result<()> {
    // Without --vehicle, preview the vehicles from the last car pack
    let vehicles = PersistedConfig::load().vehicles_or_recent(vehicles);
    let routes = plan_vehicle_routes(&vehicles)?;

    let mut kept = 0;
    let mut dropped = 0;
    for route in &routes {
        match &route.destination {
            Some(destination) => {
                kept += 1;
                if !dropped_only {
                    println!("  {}/{} -> {}", route.vehicle, route.relative, destination);
                }
            }
            None => {
                dropped += 1;
                println!("  {}/{} -> (dropped)", route.vehicle, route.relative);
            }
        }
    }

    println!();
    println!("{kept} files routed, {dropped} dropped");
    Ok(())
}
