#[cfg(test)]
mod common;

#[cfg(test)]
mod store_tests;

#[cfg(test)]
mod filter_tests;

#[cfg(test)]
mod pagination_tests;

#[cfg(test)]
mod list_view_tests;

#[cfg(test)]
mod student_tests;

#[cfg(test)]
mod parent_tests;

#[cfg(test)]
mod role_tests;

#[cfg(test)]
mod reset_tests;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod teacher_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod corporate_tests;
