mod common;
mod detectors;
