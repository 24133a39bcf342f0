mod tests_lossless;
mod tests_recovery;
