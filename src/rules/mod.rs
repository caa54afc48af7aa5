//! Built-in lint rules.
//!
//! This module contains the project-convention rules that ship with coplint.

pub mod add_preview_for_view_component;
pub mod no_do_end_block_with_capybara_matcher;
pub mod no_sleep_in_feature_specs;
pub mod use_service_result_factory_methods;

pub use add_preview_for_view_component::AddPreviewForViewComponentRule;
pub use no_do_end_block_with_capybara_matcher::NoDoEndBlockWithCapybaraMatcherRule;
pub use no_sleep_in_feature_specs::NoSleepInFeatureSpecsRule;
pub use use_service_result_factory_methods::UseServiceResultFactoryMethodsRule;
