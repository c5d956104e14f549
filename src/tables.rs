use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use usage_compare::compare::{Entity, Trend};

use crate::fmt::FormattedPercentage;

pub fn build_entities_table(entities: &[Entity]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "ID",
        "Name",
        "Last period",
        "To this point",
        "Current",
        "Projected",
        "Change",
    ]);
    for entity in entities {
        let trend_color = match entity.trend() {
            Trend::Decrease => Color::Green,
            Trend::Increase => Color::Red,
        };
        table.add_row(vec![
            Cell::new(entity.id).add_attribute(Attribute::Dim),
            Cell::new(&entity.name),
            Cell::new(entity.last_period_total_usage).set_alignment(CellAlignment::Right),
            Cell::new(entity.used_to_this_point_last_time_period)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(entity.current_period_usage).set_alignment(CellAlignment::Right),
            Cell::new(entity.projected_period_usage())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(FormattedPercentage(entity.change))
                .set_alignment(CellAlignment::Right)
                .fg(trend_color),
        ]);
    }
    table
}
