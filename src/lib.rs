pub mod console {
    pub mod printer;
    pub mod reader;
}
pub mod error;
pub mod matrix {
    pub mod matrix;
    pub mod matrix_dense;
}
pub mod reduce {
    pub mod analysis;
    pub mod passes;
    pub mod primitives;
    pub mod reducer;
}
pub mod rings {
    pub mod fraction;
    pub mod scalar;
}
