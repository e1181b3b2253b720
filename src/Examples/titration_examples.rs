use crate::Titration::equilibrium_models::EquilibriumModel;
use crate::Titration::regime::Regime;
use crate::Titration::titration_api::{Titration, generate_curve};
use crate::Titration::titration_config::{TitrationConfig, TitrationSpec, TitrationTask};
use crate::Titration::titration_output::{format_ph, format_volume};
use approx::assert_relative_eq;

#[allow(non_snake_case)]
pub fn titration_examples(titration_task: usize) {
    //
    match titration_task {
        0 => {
            // 51.3 mL of 0.131 M acetic acid, 0.0953 M NaOH
            let spec = TitrationSpec::new(0.0513, 0.131, 0.0953, 1.76e-5).unwrap();
            let titration = Titration::new(spec).unwrap();
            let summary = titration.summary().unwrap();
            summary.pretty_print();
            assert_relative_eq!(summary.initial_pH, 2.82, epsilon = 0.01);
            assert_relative_eq!(summary.half_equivalence_pH, summary.pKa, epsilon = 0.01);

            let curve = titration.curve(0.15, 50).unwrap();
            curve.pretty_print_curve(10);
            println!("monotonic: {}", curve.is_monotonic());
            if let Some((volume, slope)) = curve.steepest_point() {
                println!(
                    "steepest rise at {}: {:.1} pH units per L",
                    format_volume(volume),
                    slope
                );
            }
        }
        1 => {
            // same base against acids of different strength
            let acids = [
                ("acetic acid", 1.76e-5),
                ("formic acid", 1.8e-4),
                ("benzoic acid", 6.3e-5),
                ("chloroacetic acid", 1.4e-3),
                ("hydrocyanic acid", 6.2e-10),
            ];
            for (name, Ka) in acids {
                let spec = TitrationSpec::new(0.05, 0.1, 0.1, Ka).unwrap();
                let titration = Titration::new(spec).unwrap();
                let summary = titration.summary().unwrap();
                println!(
                    "{}: pKa {:.2}, start pH {}, equivalence pH {}",
                    name,
                    summary.pKa,
                    format_ph(summary.initial_pH),
                    format_ph(summary.equivalence_pH)
                );
            }
        }
        2 => {
            // point evaluation, each volume goes to the model of its own regime
            let spec = TitrationSpec::new(0.0513, 0.131, 0.0953, 1.76e-5).unwrap();
            let titration = Titration::new(spec).unwrap();
            for volume in [0.0, 0.01, 0.0353, 0.06, 0.0705, 0.08, 0.15] {
                let point = titration.sample(volume).unwrap();
                let model = titration.model(point.regime);
                assert_eq!(model.regime(), point.regime);
                println!(
                    "{:>10} {:>10}  pH {}",
                    point.regime,
                    format_volume(volume),
                    format_ph(point.pH)
                );
            }
            let post = titration.model(Regime::PostEq);
            println!("pH at V_max: {}", format_ph(post.ph(0.15).unwrap()));
        }
        3 => {
            // task given as JSON, with a non-default ion product of water
            let json = r#"{
                "spec": {
                    "V_a": 0.0513, "C_a": 0.131, "C_b": 0.0953, "Ka": 1.76e-5,
                    "config": { "Kw": 5.5e-14 }
                },
                "V_max": 0.15,
                "samples_per_regime": 30
            }"#;
            let task = TitrationTask::from_json_str(json).unwrap();
            let warm = task.run().unwrap();
            let default_spec = TitrationSpec {
                config: TitrationConfig::default(),
                ..task.spec
            };
            let cold = generate_curve(default_spec, task.V_max, task.samples_per_regime).unwrap();
            for (w, c) in warm.points().iter().zip(cold.points()).step_by(10) {
                println!(
                    "{}: pH {} (Kw = 5.5e-14) vs {} (Kw = 1e-14)",
                    format_volume(w.volume),
                    format_ph(w.pH),
                    format_ph(c.pH)
                );
            }
        }
        _ => {
            println!("no such example");
        }
    }
}
