use std::io::Write;

use meadowbrook_planner::{Group, InterestFlag, PreferenceInput, Vibe, select_recommendations};

/// Prints a day plan without loading any configuration.
pub fn print(vibe: Vibe, group: Group, interests: Vec<InterestFlag>) -> anyhow::Result<()> {
    write_plan(&mut std::io::stdout().lock(), vibe, group, interests)
}

fn write_plan(
    out: &mut impl Write,
    vibe: Vibe,
    group: Group,
    interests: Vec<InterestFlag>,
) -> anyhow::Result<()> {
    let plan = select_recommendations(&PreferenceInput {
        name: String::new(),
        vibe,
        group,
        interests: interests.into_iter().collect(),
    });

    writeln!(out, "{}", plan.summary)?;

    for (i, rec) in plan.recommendations.iter().enumerate() {
        writeln!(out, "{}. {}: {}", i + 1, rec.title, rec.description)?;
        if let Some(link) = rec.link {
            writeln!(out, "   {link}")?;
        }
    }

    Ok(())
}
