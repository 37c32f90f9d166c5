use super::{expect_eq, step, TestResult};
use crate::KeyValueStore;

pub(super) fn run_basic_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: KeyValueStore,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "basic",
            "missing_key_reads_none",
            missing_key_reads_none(&factory()),
        ),
        TestResult::from_result(
            "basic",
            "set_then_get_returns_value",
            set_then_get_returns_value(&factory()),
        ),
        TestResult::from_result(
            "basic",
            "set_overwrites_previous_value",
            set_overwrites_previous_value(&factory()),
        ),
        TestResult::from_result(
            "basic",
            "remove_deletes_value",
            remove_deletes_value(&factory()),
        ),
        TestResult::from_result(
            "basic",
            "remove_missing_key_succeeds",
            remove_missing_key_succeeds(&factory()),
        ),
    ]
}

fn missing_key_reads_none<S: KeyValueStore>(store: &S) -> Result<(), String> {
    let value = step("get", store.get("state"))?;
    expect_eq("missing key", value, None)
}

fn set_then_get_returns_value<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("set", store.set("state", r#"{"idea":"x","blocks":[]}"#))?;
    let value = step("get", store.get("state"))?;
    expect_eq(
        "stored value",
        value.as_deref(),
        Some(r#"{"idea":"x","blocks":[]}"#),
    )
}

fn set_overwrites_previous_value<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("first set", store.set("theme", "light"))?;
    step("second set", store.set("theme", "dark"))?;
    let value = step("get", store.get("theme"))?;
    expect_eq("overwritten value", value.as_deref(), Some("dark"))
}

fn remove_deletes_value<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("set", store.set("state", "{}"))?;
    step("remove", store.remove("state"))?;
    let value = step("get", store.get("state"))?;
    expect_eq("removed key", value, None)
}

fn remove_missing_key_succeeds<S: KeyValueStore>(store: &S) -> Result<(), String> {
    step("remove", store.remove("never-set"))?;
    step("remove again", store.remove("never-set"))
}
