mod tests_completion;
mod tests_diagnostics;
mod tests_quick_fix;
