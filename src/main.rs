//! Demonstration driver: ingests the sample path and prints coordinates and
//! FIRST_SECOND distances in both frames.

use std::io::Cursor;

use waypoint_planner::{
    AxisConfig, AxisDirection, AxisSelection, PathReport, TextFormatter, Unit, WaypointPlanner,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "1  ,2,3 \n 9,7,5 \n -1,-3, -5\n -1,-5,-9 \n   4, 6,2";
    let config = AxisConfig::new(
        AxisDirection::XPlus,
        AxisDirection::YPlus,
        AxisDirection::ZPlus,
        Unit::Kilometers,
    );

    let planner = WaypointPlanner::from_reader(config, Cursor::new(input))?;
    let formatter = TextFormatter::new();

    for canonical in [false, true] {
        let report = PathReport::from_planner(
            &planner,
            AxisSelection::FirstSecond,
            canonical,
            Unit::Kilometers,
        );
        print!("{}", formatter.format_text(&report));
    }

    Ok(())
}
