mod canonical_laptop;
mod loading;
mod monotonicity;
mod policy;
