use armtorque::core::models::result::MotorResult;

const COLUMNS: [&str; 8] = [
    "#",
    "Motor",
    "Torque [N·m]",
    "Torque SF [N·m]",
    "Motor-side [N·m]",
    "Motor-side SF [N·m]",
    "Power [W]",
    "Power SF [W]",
];
const BREAKDOWN_COLUMNS: [&str; 3] = ["Payload [N·m]", "Links [N·m]", "Motors [N·m]"];

fn cell_width(header: &str) -> usize {
    header.chars().count().max(10)
}

/// Renders results as a plain-text table, numbering rows by their position.
pub fn render_table(results: &[MotorResult], show_breakdown: bool) -> String {
    let mut headers: Vec<&str> = COLUMNS.to_vec();
    if show_breakdown {
        headers.extend_from_slice(&BREAKDOWN_COLUMNS);
    }
    let widths: Vec<usize> = headers.iter().map(|h| cell_width(h)).collect();

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>w$}", h, w = *w))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for (i, result) in results.iter().enumerate() {
        let mut cells = vec![
            format!("{:>w$}", i + 1, w = widths[0]),
            format!("{:>w$}", result.motor_number, w = widths[1]),
        ];
        let mut values = vec![
            result.torque_total,
            result.torque_with_safety_factor,
            result.torque_before_gearing,
            result.torque_before_gearing_with_safety_factor,
            result.power,
            result.power_with_safety_factor,
        ];
        if show_breakdown {
            values.extend([
                result.breakdown.payload,
                result.breakdown.links,
                result.breakdown.motors,
            ]);
        }
        cells.extend(
            values
                .iter()
                .zip(&widths[2..])
                .map(|(v, w)| format!("{:>w$.3}", v, w = *w)),
        );
        out.push_str(&cells.join("  "));
        out.push('\n');
    }

    out
}
