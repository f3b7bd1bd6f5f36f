mod common;
mod learner;
mod routing;
