//! Then steps for board reconciliation BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

#[then(r#"column "{column}" lists "{expected}""#)]
fn column_lists(world: &BoardWorld, column: String, expected: String) -> Result<(), eyre::Report> {
    let want: Vec<String> = expected
        .split(',')
        .map(|title| title.trim().to_owned())
        .filter(|title| !title.is_empty())
        .collect();
    let got = world.column_titles(&column);
    if got != want {
        return Err(eyre::eyre!(
            "expected column {column:?} to list {want:?}, found {got:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" lists nothing"#)]
fn column_lists_nothing(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let got = world.column_titles(&column);
    if !got.is_empty() {
        return Err(eyre::eyre!(
            "expected column {column:?} to be empty, found {got:?}"
        ));
    }
    Ok(())
}
