use super::{expect_eq, step, TestResult};
use crate::KeyValueStore;

pub(super) fn run_isolation_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: KeyValueStore,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "isolation",
            "keys_are_independent",
            keys_are_independent(&factory()),
        ),
        TestResult::from_result(
            "isolation",
            "remove_leaves_other_keys",
            remove_leaves_other_keys(&factory()),
        ),
        TestResult::from_result(
            "isolation",
            "values_preserved_verbatim",
            values_preserved_verbatim(&factory()),
        ),
        TestResult::from_result(
            "isolation",
            "empty_value_is_not_missing",
            empty_value_is_not_missing(&factory()),
        ),
    ]
}

fn keys_are_independent<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("set state", store.set("state", "a"))?;
    step("set themeVars", store.set("themeVars", "b"))?;
    expect_eq(
        "state",
        step("get state", store.get("state"))?.as_deref(),
        Some("a"),
    )?;
    expect_eq(
        "themeVars",
        step("get themeVars", store.get("themeVars"))?.as_deref(),
        Some("b"),
    )
}

fn remove_leaves_other_keys<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("set state", store.set("state", "a"))?;
    step("set theme", store.set("theme", "dark"))?;
    step("remove state", store.remove("state"))?;
    expect_eq(
        "theme after removing state",
        step("get theme", store.get("theme"))?.as_deref(),
        Some("dark"),
    )
}

fn values_preserved_verbatim<S: KeyValueStore>(store: &S) -> Result<(), String> {
    let value = "  Feed d’articles ✨\n\t{\"x\": [1, 2]}  ";
    step("set", store.set("state", value))?;
    expect_eq(
        "unicode and whitespace",
        step("get", store.get("state"))?.as_deref(),
        Some(value),
    )
}

fn empty_value_is_not_missing<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("set", store.set("state-cleared", ""))?;
    expect_eq(
        "empty value",
        step("get", store.get("state-cleared"))?.as_deref(),
        Some(""),
    )
}
