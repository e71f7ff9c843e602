//! The `dot` module contains the conversion from an automaton table to a graphviz dot format.
//! It is used for debugging purposes.

use std::io::Write;

use dot_writer::{Attributes, DotWriter, RankDirection};

use crate::{DfaTable, Result};

/// Render the table to a graphviz dot format.
/// Start states of modes are drawn blue, accepting states red with their symbol names.
pub(crate) fn table_render<W: Write>(table: &DfaTable, label: &str, output: &mut W) -> Result<()> {
    // DotWriter writes into a buffer first, the final write reports io errors.
    let mut buffer = Vec::new();
    {
        let mut writer = DotWriter::from(&mut buffer);
        writer.set_pretty_print(true);
        let mut digraph = writer.digraph();
        digraph
            .set_label(label)
            .set_rank_direction(RankDirection::LeftRight);
        for (state_id, state) in table.states().iter().enumerate() {
            let mut node = digraph.node_named(format!("node_{state_id}"));
            node.set_label(&state_id.to_string());
            if table
                .modes()
                .iter()
                .any(|mode| mode.start_state.as_usize() == state_id)
            {
                node.set_shape(dot_writer::Shape::Circle)
                    .set_color(dot_writer::Color::Blue)
                    .set_pen_width(3.0);
            }
            if state.is_accepting() {
                let names = state
                    .accepting()
                    .iter()
                    .map(|symbol| table.symbol_name(*symbol).unwrap_or("?"))
                    .collect::<Vec<_>>()
                    .join(", ");
                node.set_color(dot_writer::Color::Red)
                    .set_pen_width(3.0)
                    .set_label(&format!("{}\n{}", state_id, names.escape_default()));
            }
        }
        for (source_id, state) in table.states().iter().enumerate() {
            for (range, target) in state.transitions() {
                let label = if range.start == range.end {
                    range.start.escape_default().to_string()
                } else {
                    format!(
                        "{}-{}",
                        range.start.escape_default(),
                        range.end.escape_default()
                    )
                };
                digraph
                    .edge(
                        format!("node_{source_id}"),
                        format!("node_{}", target.as_usize()),
                    )
                    .attributes()
                    .set_label(&label);
            }
            if let Some(target) = state.eof_transition() {
                digraph
                    .edge(
                        format!("node_{source_id}"),
                        format!("node_{}", target.as_usize()),
                    )
                    .attributes()
                    .set_label("EOF");
            }
        }
    }
    output.write_all(&buffer)?;
    Ok(())
}
