mod weight;
