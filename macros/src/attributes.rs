pub(crate) mod test;
