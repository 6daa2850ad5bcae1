//! Built-in [`Encode`](crate::Encode) / [`Decode`](crate::Decode) impls, one
//! module per category

mod array;
mod map;
mod option;
mod pointer;
mod scalar;
mod seq;
mod text;
mod time;
mod tuple;
