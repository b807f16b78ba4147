//! Behavioural coverage for validating user criteria.

use std::cell::RefCell;

use platewise_core::{CriteriaError, UserCriteria};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type CriteriaResult = RefCell<Option<Result<UserCriteria, CriteriaError>>>;

#[fixture]
fn city() -> RefCell<String> {
    RefCell::new(String::new())
}

#[fixture]
fn result() -> CriteriaResult {
    RefCell::new(None)
}

#[given("the city {name}")]
fn given_city(#[from(city)] city: &RefCell<String>, name: String) {
    *city.borrow_mut() = name.trim_matches('"').to_owned();
}

#[when("I build criteria with a budget of {budget}")]
fn build_criteria(
    #[from(city)] city: &RefCell<String>,
    #[from(result)] result: &CriteriaResult,
    budget: f64,
) {
    *result.borrow_mut() = Some(UserCriteria::new(city.borrow().clone(), budget));
}

#[then("the criteria are accepted")]
fn criteria_accepted(#[from(result)] result: &CriteriaResult) {
    let binding = result.borrow();
    match binding.as_ref() {
        Some(Ok(criteria)) => assert_eq!(criteria.city(), "Banashankari"),
        other => panic!("expected accepted criteria, got {other:?}"),
    }
}

#[then("the criteria are rejected because the city is empty")]
fn rejected_city(#[from(result)] result: &CriteriaResult) {
    assert!(matches!(
        result.borrow().as_ref(),
        Some(Err(CriteriaError::EmptyCity))
    ));
}

#[then("the criteria are rejected because the budget is invalid")]
fn rejected_budget(#[from(result)] result: &CriteriaResult) {
    assert!(matches!(
        result.borrow().as_ref(),
        Some(Err(CriteriaError::InvalidMaxPrice { .. }))
    ));
}

#[scenario(path = "tests/features/criteria.feature", index = 0)]
fn accepts_valid_criteria(city: RefCell<String>, result: CriteriaResult) {
    let _ = (city, result);
}

#[scenario(path = "tests/features/criteria.feature", index = 1)]
fn rejects_blank_city(city: RefCell<String>, result: CriteriaResult) {
    let _ = (city, result);
}

#[scenario(path = "tests/features/criteria.feature", index = 2)]
fn rejects_zero_budget(city: RefCell<String>, result: CriteriaResult) {
    let _ = (city, result);
}
