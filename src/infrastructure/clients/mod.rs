pub(crate) mod quanthockey;
