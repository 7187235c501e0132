//! Text rendering of box column results.
//!
//! The summary mirrors the input form's result panel; the step report walks
//! through each equation with the numbers substituted.

use calc_core::calculations::{
    Axis, AxisCapacityResult, BoxColumnInput, BoxColumnResult, CapacityOutcome, WallSlendernessCheck,
};
use calc_core::equations::compression::{self, BucklingRegime};
use calc_core::equations::registry::Equation;
use calc_core::units::{Inches, Meters};

const RULE: &str = "═══════════════════════════════════════";

/// Result panel: applicability message, governing and per-axis capacity.
pub fn render_summary(input: &BoxColumnInput, outcome: &CapacityOutcome<BoxColumnResult>) -> String {
    let mut lines = Vec::new();
    let section = &input.section;

    lines.push(RULE.to_string());
    if input.label.is_empty() {
        lines.push("  BOX COLUMN COMPRESSION CAPACITY".to_string());
    } else {
        lines.push(format!("  BOX COLUMN COMPRESSION CAPACITY: {}", input.label));
    }
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines.push("Input:".to_string());
    lines.push(format!(
        "  Section:  {:.3}\" x {:.3}\" x {:.3}\" wall",
        section.base_in, section.depth_in, section.wall_thickness_in
    ));
    lines.push(format!("  Material: {}", input.material));
    lines.push(format!("  Height:   {:.3} m", input.member.clear_height_m));
    lines.push(format!("  Kx = {:.2}, Ky = {:.2}", input.member.k_x, input.member.k_y));
    lines.push(String::new());

    match outcome {
        CapacityOutcome::NotApplicable(check) => {
            lines.push(check.message().to_string());
            lines.push(String::new());
            lines.push(RULE.to_string());
            lines.push("  RESULT: NOT APPLICABLE".to_string());
        }
        CapacityOutcome::Applicable(result) => {
            lines.push(result.wall_check.message().to_string());
            lines.push(String::new());
            lines.push("Capacity:".to_string());
            for axis in Axis::BOTH {
                let r = result.axis(axis);
                lines.push(format!(
                    "  φPn{} = {:.2} kips  (KL/r = {:.2}, {})",
                    axis_suffix(axis),
                    r.capacity_kips,
                    r.slenderness_ratio,
                    r.regime
                ));
            }
            lines.push(String::new());
            lines.push(RULE.to_string());
            lines.push(format!(
                "  RESULT: φPn = {:.2} kips (governs: {})",
                result.governing_capacity_kips, result.governing_axis
            ));
        }
    }
    lines.push(RULE.to_string());

    lines.join("\n")
}

/// Step-by-step derivation with substituted values.
pub fn render_steps(input: &BoxColumnInput, outcome: &CapacityOutcome<BoxColumnResult>) -> String {
    let mut lines = Vec::new();
    let section = &input.section;
    let member = &input.member;
    let (b, d, t) = (section.base_in, section.depth_in, section.wall_thickness_in);
    let e = member.elastic_modulus_ksi;
    let fy = input.material.yield_stress_ksi();

    lines.push("Step-by-step derivation".to_string());
    lines.push("-----------------------".to_string());
    lines.push(format!("Material: {} → Fy = {:.0} ksi, E = {:.0} ksi", input.material, fy, e));
    lines.push(String::new());

    let check = match outcome {
        CapacityOutcome::Applicable(result) => &result.wall_check,
        CapacityOutcome::NotApplicable(check) => check,
    };

    heading(&mut lines, Equation::ClearDimensions);
    lines.push(format!("  b1 = {b:.3} - 2·{t:.3} = {:.3} in", check.clear_base_in));
    lines.push(format!("  d1 = {d:.3} - 2·{t:.3} = {:.3} in", check.clear_depth_in));

    wall_check_steps(&mut lines, check, e, fy);

    let result = match outcome {
        CapacityOutcome::NotApplicable(_) => return lines.join("\n"),
        CapacityOutcome::Applicable(result) => result,
    };

    heading(&mut lines, Equation::BoxArea);
    lines.push(format!(
        "  A = {b:.3}·{d:.3} - {:.3}·{:.3} = {:.3} in²",
        check.clear_base_in, check.clear_depth_in, result.x.area_in2
    ));

    let length_in = Inches::from(Meters(member.clear_height_m)).value();
    for axis in Axis::BOTH {
        lines.push(String::new());
        lines.push(format!("Buckling about the {axis}"));
        axis_steps(&mut lines, result.axis(axis), member.k_for(axis), length_in, e, fy, member.phi);
    }

    heading(&mut lines, Equation::GoverningCapacity);
    lines.push(format!(
        "  φPn = min({:.2}, {:.2}) = {:.2} kips ({} governs)",
        result.x.capacity_kips, result.y.capacity_kips, result.governing_capacity_kips, result.governing_axis
    ));

    lines.push(String::new());
    lines.push("Equations applied".to_string());
    for (category, equations) in result.equations.by_category() {
        lines.push(format!("  {}:", category.display_name()));
        for equation in equations {
            let meta = equation.metadata();
            lines.push(format!("    {} ({})", meta.name, meta.reference.citation()));
        }
    }

    lines.join("\n")
}

fn wall_check_steps(lines: &mut Vec<String>, check: &WallSlendernessCheck, e: f64, fy: f64) {
    heading(lines, Equation::WallSlendernessLimit);
    lines.push(format!("  λr = 1.49·√({e:.0}/{fy:.0}) = {:.2}", check.limit));

    heading(lines, Equation::WallWidthToThickness);
    lines.push(format!("  b1/t = {:.2} {} λr", check.base_ratio, compare(check.base_ratio, check.limit)));
    lines.push(format!("  d1/t = {:.2} {} λr", check.depth_ratio, compare(check.depth_ratio, check.limit)));
    lines.push(format!("  → {}", check.message()));
}

fn axis_steps(
    lines: &mut Vec<String>,
    r: &AxisCapacityResult,
    k: f64,
    length_in: f64,
    e: f64,
    fy: f64,
    phi: f64,
) {
    let suffix = axis_suffix(r.axis);

    heading(
        lines,
        match r.axis {
            Axis::X => Equation::BoxMomentOfInertiaX,
            Axis::Y => Equation::BoxMomentOfInertiaY,
        },
    );
    lines.push(format!("  I{suffix} = {:.3} in⁴", r.moment_of_inertia_in4));

    heading(lines, Equation::RadiusOfGyration);
    lines.push(format!(
        "  r{suffix} = √({:.3}/{:.3}) = {:.4} in",
        r.moment_of_inertia_in4, r.area_in2, r.radius_of_gyration_in
    ));

    heading(lines, Equation::EffectiveSlenderness);
    lines.push(format!(
        "  KL/r = {k:.2}·{length_in:.2}/{:.4} = {:.2}",
        r.radius_of_gyration_in, r.slenderness_ratio
    ));

    heading(lines, Equation::ElasticBucklingStress);
    lines.push(format!(
        "  Fe = π²·{e:.0}/{:.2}² = {:.3} ksi",
        r.slenderness_ratio, r.elastic_buckling_stress_ksi
    ));

    let (equation, substitution) = match r.regime {
        BucklingRegime::Yield => (Equation::NominalStressYield, format!("Fn = Fy = {fy:.3}")),
        BucklingRegime::Inelastic => (
            Equation::NominalStressInelastic,
            format!(
                "Fn = {fy:.0}·0.658^({fy:.0}/{:.3}) = {:.3}",
                r.elastic_buckling_stress_ksi, r.nominal_stress_ksi
            ),
        ),
        BucklingRegime::Elastic => (
            Equation::NominalStressElastic,
            format!("Fn = 0.877·{:.3} = {:.3}", r.elastic_buckling_stress_ksi, r.nominal_stress_ksi),
        ),
    };
    heading(lines, equation);
    if r.regime != BucklingRegime::Yield {
        lines.push(format!(
            "  KL/r = {:.2}, 4.71·√(E/Fy) = {:.2}",
            r.slenderness_ratio,
            compression::inelastic_slenderness_limit(e, fy)
        ));
    }
    lines.push(format!("  {substitution} ksi"));

    heading(lines, Equation::DesignCompressiveStrength);
    lines.push(format!(
        "  φPn{suffix} = {:.3}·{:.3}·{phi:.2} = {:.2} kips",
        r.nominal_stress_ksi, r.area_in2, r.capacity_kips
    ));
}

fn heading(lines: &mut Vec<String>, equation: Equation) {
    let meta = equation.metadata();
    lines.push(format!("{}: {}  [{}]", meta.name, meta.formula_plain, meta.reference.short_form()));
}

fn compare(ratio: f64, limit: f64) -> &'static str {
    if ratio <= limit {
        "≤"
    } else {
        ">"
    }
}

fn axis_suffix(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{BoxSection, MemberProperties};
    use calc_core::{calculate, SteelGrade};

    fn test_input() -> BoxColumnInput {
        BoxColumnInput {
            label: "C-1".to_string(),
            section: BoxSection::new(4.0, 10.0, 0.5),
            material: SteelGrade::A36,
            member: MemberProperties {
                k_x: 1.0,
                k_y: 1.0,
                clear_height_m: 3.0,
                elastic_modulus_ksi: 29000.0,
                phi: 0.90,
            },
        }
    }

    #[test]
    fn test_summary_applicable() {
        let input = test_input();
        let outcome = calculate(&input).unwrap();
        let text = render_summary(&input, &outcome);

        assert!(text.contains("C-1"));
        assert!(text.contains("Compression capacity available with this app"));
        assert!(text.contains("395.41"));
        assert!(text.contains("315.62"));
        assert!(text.contains("governs: y-axis"));
    }

    #[test]
    fn test_summary_not_applicable() {
        let mut input = test_input();
        input.section.wall_thickness_in = 0.125;
        let outcome = calculate(&input).unwrap();
        let text = render_summary(&input, &outcome);

        assert!(text.contains("Compression capacity NOT available with this app"));
        assert!(text.contains("NOT APPLICABLE"));
        assert!(!text.contains("kips"));
    }

    #[test]
    fn test_steps_contain_every_stage() {
        let input = test_input();
        let outcome = calculate(&input).unwrap();
        let text = render_steps(&input, &outcome);

        for equation in [
            Equation::ClearDimensions,
            Equation::WallSlendernessLimit,
            Equation::WallWidthToThickness,
            Equation::BoxArea,
            Equation::BoxMomentOfInertiaX,
            Equation::BoxMomentOfInertiaY,
            Equation::RadiusOfGyration,
            Equation::EffectiveSlenderness,
            Equation::ElasticBucklingStress,
            Equation::NominalStressInelastic,
            Equation::DesignCompressiveStrength,
            Equation::GoverningCapacity,
        ] {
            assert!(text.contains(equation.metadata().name), "missing {:?}", equation);
        }
        assert!(text.contains("13.000 in²"));
        assert!(text.contains("= 315.62 kips"));
    }

    #[test]
    fn test_steps_list_applied_equations_by_category() {
        let input = test_input();
        let outcome = calculate(&input).unwrap();
        let text = render_steps(&input, &outcome);

        let applied = text.split("Equations applied").nth(1).unwrap();
        let section = applied.find("Section Properties:").unwrap();
        let buckling = applied.find("Buckling Stresses:").unwrap();
        let design = applied.find("Design Strength:").unwrap();
        assert!(section < buckling && buckling < design);

        // Only the branch actually taken is listed
        assert!(applied.contains(Equation::NominalStressInelastic.metadata().name));
        assert!(!applied.contains(Equation::NominalStressElastic.metadata().name));
        assert!(!applied.contains(Equation::NominalStressYield.metadata().name));
    }

    #[test]
    fn test_steps_stop_at_slender_walls() {
        let mut input = test_input();
        input.section.wall_thickness_in = 0.125;
        let outcome = calculate(&input).unwrap();
        let text = render_steps(&input, &outcome);

        assert!(text.contains("NOT available"));
        assert!(!text.contains(Equation::BoxArea.metadata().name));
    }

    #[test]
    fn test_steps_elastic_branch() {
        let mut input = test_input();
        input.member.clear_height_m = 10.0;
        let outcome = calculate(&input).unwrap();
        let text = render_steps(&input, &outcome);

        assert!(text.contains(Equation::NominalStressElastic.metadata().name));
        assert!(text.contains("Fn = 0.877·"));
    }
}
