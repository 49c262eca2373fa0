mod end_to_end;
mod report_workflow;
