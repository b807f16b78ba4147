//! Instructions sent to the completion service.

use platewise_core::{CompletionRequest, UserCriteria};

/// Build the single request used to rank a pool.
///
/// `context` is the rendered pool from [`crate::build_context`].
#[must_use]
pub fn ranking_request(criteria: &UserCriteria, context: &str, top_k: usize) -> CompletionRequest {
    CompletionRequest::new(system_prompt(top_k), user_prompt(criteria, context, top_k))
}

fn system_prompt(top_k: usize) -> String {
    format!(
        "You are a restaurant recommendation assistant.\n\
         Choose the restaurants from the supplied list that best suit the user's locality and budget.\n\
         \n\
         Rules:\n\
         1. Select at most {top_k} restaurants, using only names that appear in the list.\n\
         2. Rank them from 1 to {top_k}, best first.\n\
         3. Give every restaurant its own specific reason that cites the data, such as its rating, \
         vote count, price or cuisines.\n\
         4. Never repeat the same reason for different restaurants.\n\
         5. Reply with a JSON array only, with no prose and no markdown.\n\
         \n\
         Each array element must have this shape:\n\
         {{\"name\": \"Restaurant Name\", \"rank\": 1, \"reason\": \"Specific reason.\"}}"
    )
}

fn user_prompt(criteria: &UserCriteria, context: &str, top_k: usize) -> String {
    format!(
        "Locality: {city}\n\
         Maximum budget for two: {budget}\n\
         \n\
         Candidate restaurants:\n\
         {context}\n\
         \n\
         Return the top {top_k} recommendations as a JSON array.",
        city = criteria.city(),
        budget = criteria.max_price(),
    )
}
