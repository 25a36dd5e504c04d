mod test_levels;
mod test_moves;
mod test_walkability;
