pub(crate) mod expect;
