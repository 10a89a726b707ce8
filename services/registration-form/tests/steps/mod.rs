mod form;
mod submission;
