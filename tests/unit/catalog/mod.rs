mod yarn;
