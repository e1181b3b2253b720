pub mod titration_examples;
