//! # Pretty printing of titration results
//!
//! Scalar formatters for moles, volumes and pH, and prettytable tables for the
//! equivalence geometry, the landmark summary and the sampled curve.
use super::equivalence::EquivalencePoint;
use super::titration_api::TitrationSummary;
use super::titration_curve::TitrationCurve;
use prettytable::{Table, row};

pub fn format_moles(moles: f64) -> String {
    format!("{:.4e} mol", moles)
}

/// volumes are stored in liters and shown in milliliters
pub fn format_volume(volume: f64) -> String {
    format!("{:.2} mL", volume * 1.0e3)
}

#[allow(non_snake_case)]
pub fn format_ph(pH: f64) -> String {
    format!("{:.2}", pH)
}

impl EquivalencePoint {
    pub fn equivalence_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value"]);
        table.add_row(row!["Initial moles of acid", format_moles(self.initial_moles)]);
        table.add_row(row!["Half-equivalence volume (V_half)", format_volume(self.V_half)]);
        table.add_row(row!["Equivalence volume (V_eq)", format_volume(self.V_eq)]);
        table
    }

    pub fn pretty_print(&self) {
        println!("___________________EQUIVALENCE POINT________________________");
        self.equivalence_table().printstd();
        println!("_____________________________________________________________");
    }
}

impl TitrationSummary {
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Landmark", "Volume", "pH"]);
        table.add_row(row!["Start", format_volume(0.0), format_ph(self.initial_pH)]);
        table.add_row(row![
            "Half equivalence",
            format_volume(self.equivalence.V_half),
            format_ph(self.half_equivalence_pH)
        ]);
        table.add_row(row![
            "Equivalence",
            format_volume(self.equivalence.V_eq),
            format_ph(self.equivalence_pH)
        ]);
        table.add_row(row!["pKa", "-", format!("{:.3}", self.pKa)]);
        table
    }

    pub fn pretty_print(&self) {
        println!("___________________TITRATION SUMMARY________________________");
        self.equivalence.equivalence_table().printstd();
        self.summary_table().printstd();
        println!("_____________________________________________________________");
    }
}

impl TitrationCurve {
    /// table of every `every`-th sample; the last sample is always listed
    pub fn curve_table(&self, every: usize) -> Table {
        let every = every.max(1);
        let mut table = Table::new();
        table.add_row(row!["#", "Regime", "Volume", "pH"]);
        let last = self.len().saturating_sub(1);
        for (i, p) in self.points().iter().enumerate() {
            if i % every == 0 || i == last {
                table.add_row(row![i, p.regime, format_volume(p.volume), format_ph(p.pH)]);
            }
        }
        table
    }

    pub fn pretty_print_curve(&self, every: usize) {
        println!("___________________TITRATION CURVE________________________");
        self.curve_table(every).printstd();
        let gaps = self.boundary_gaps();
        for gap in gaps {
            println!(
                "{} -> {} at {}: delta pH = {:.4}",
                gap.from,
                gap.to,
                format_volume(gap.volume),
                gap.delta_pH
            );
        }
        println!("_____________________________________________________________");
    }
}
